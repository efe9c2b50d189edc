//! Template compilation for the date parser
//!
//! Translates the template token vocabulary (`yyyy`, `yy`, `MM`, `dd`,
//! `HH`, `mm`, `ss`, literal separators) into chrono format strings.
//! Compiled templates are cached process-wide so repeated parsing and
//! inference over the same catalog never recompiles.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{BasicError, Result};

/// A template translated to its chrono equivalent
#[derive(Debug, Clone)]
pub(crate) struct CompiledTemplate {
    /// The equivalent chrono format string
    pub chrono_format: Arc<str>,
    /// Template carries hour and minute tokens
    pub has_time: bool,
}

/// Process-wide cache of compiled templates
static TEMPLATE_CACHE: Lazy<RwLock<HashMap<String, CompiledTemplate>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Compile a template, consulting the cache first
///
/// # Errors
///
/// Returns an `InvalidArgument` error when the template uses an unsupported
/// token or an incomplete token set.
pub(crate) fn compiled(template: &str) -> Result<CompiledTemplate> {
    // Read lock first for the common case
    {
        let cache = match TEMPLATE_CACHE.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(hit) = cache.get(template) {
            return Ok(hit.clone());
        }
    }

    let compiled = compile(template)?;
    debug!(template, chrono_format = %compiled.chrono_format, "compiled date template");

    let mut cache = match TEMPLATE_CACHE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    // Another thread may have compiled the same template while we waited
    let entry = cache.entry(template.to_string()).or_insert(compiled);
    Ok(entry.clone())
}

/// Translate one template to a chrono format string
fn compile(template: &str) -> Result<CompiledTemplate> {
    if template.is_empty() {
        return Err(BasicError::invalid_argument("date template is empty"));
    }

    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len() + 4);
    let mut years = 0u32;
    let mut months = 0u32;
    let mut days = 0u32;
    let mut hours = 0u32;
    let mut minutes = 0u32;
    let mut seconds = 0u32;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_alphabetic() {
            let mut run = 1;
            while i + run < chars.len() && chars[i + run] == c {
                run += 1;
            }
            match (c, run) {
                ('y', 4) => {
                    out.push_str("%Y");
                    years += 1;
                }
                ('y', 2) => {
                    out.push_str("%y");
                    years += 1;
                }
                ('M', 1 | 2) => {
                    out.push_str("%m");
                    months += 1;
                }
                ('d', 1 | 2) => {
                    out.push_str("%d");
                    days += 1;
                }
                ('H', 1 | 2) => {
                    out.push_str("%H");
                    hours += 1;
                }
                ('m', 1 | 2) => {
                    out.push_str("%M");
                    minutes += 1;
                }
                ('s', 1 | 2) => {
                    out.push_str("%S");
                    seconds += 1;
                }
                _ => {
                    let token: String = std::iter::repeat(c).take(run).collect();
                    return Err(BasicError::invalid_argument(format!(
                        "unsupported token '{token}' in date template '{template}'"
                    )));
                }
            }
            i += run;
        } else if c == '%' {
            // A literal percent must be escaped for chrono
            out.push_str("%%");
            i += 1;
        } else {
            out.push(c);
            i += 1;
        }
    }

    if years != 1 || months != 1 || days != 1 {
        return Err(BasicError::invalid_argument(format!(
            "date template '{template}' must contain exactly one year, one month, and one day token"
        )));
    }
    if hours > 1 || minutes > 1 || seconds > 1 {
        return Err(BasicError::invalid_argument(format!(
            "date template '{template}' repeats a time token"
        )));
    }
    let has_time = hours == 1 && minutes == 1;
    if (hours == 1) != (minutes == 1) || (seconds == 1 && !has_time) {
        return Err(BasicError::invalid_argument(format!(
            "date template '{template}' carries an incomplete time token set"
        )));
    }

    Ok(CompiledTemplate {
        chrono_format: Arc::from(out.as_str()),
        has_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_catalog_templates() {
        assert_eq!(&*compiled("yyyy-MM-dd").unwrap().chrono_format, "%Y-%m-%d");
        assert_eq!(&*compiled("yyyy/MM/dd").unwrap().chrono_format, "%Y/%m/%d");
        assert_eq!(&*compiled("yyyyMMdd").unwrap().chrono_format, "%Y%m%d");
        assert_eq!(&*compiled("MMddyyyy").unwrap().chrono_format, "%m%d%Y");
        assert_eq!(&*compiled("dd/MM/yyyy").unwrap().chrono_format, "%d/%m/%Y");
    }

    #[test]
    fn test_compile_two_digit_year_and_datetime() {
        assert_eq!(&*compiled("MM/dd/yy").unwrap().chrono_format, "%m/%d/%y");

        let datetime = compiled("yyyy-MM-dd HH:mm:ss").unwrap();
        assert_eq!(&*datetime.chrono_format, "%Y-%m-%d %H:%M:%S");
        assert!(datetime.has_time);

        let no_seconds = compiled("dd/MM/yyyy HH:mm").unwrap();
        assert_eq!(&*no_seconds.chrono_format, "%d/%m/%Y %H:%M");
        assert!(no_seconds.has_time);
    }

    #[test]
    fn test_compile_rejects_unsupported_tokens() {
        assert!(compiled("").is_err());
        assert!(compiled("yyyy-MM-dd QQ").is_err());
        assert!(compiled("yyy-MM-dd").is_err());
        assert!(compiled("yyyy-MM").is_err());
        assert!(compiled("yyyy-MM-dd-dd").is_err());
        // Seconds without hour and minute
        assert!(compiled("yyyy-MM-dd ss").is_err());
        // Hour without minute
        assert!(compiled("yyyy-MM-dd HH").is_err());
    }

    #[test]
    fn test_cache_returns_identical_formats() {
        let first = compiled("yyyy/MM/dd").unwrap();
        let second = compiled("yyyy/MM/dd").unwrap();
        assert!(Arc::ptr_eq(&first.chrono_format, &second.chrono_format));
    }
}
