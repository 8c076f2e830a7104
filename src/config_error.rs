use regex::Regex;
use std::fmt;

/// Pull the config file name out of a loader error such as
/// `failed to load configuration from file '.config/envmatch.toml'`.
pub fn extract_filename(err_msg: &str) -> Option<String> {
    let re = Regex::new(r#"from file\s+['"]([^'"]+)['"]"#).ok()?;
    let caps = re.captures(err_msg)?;
    Some(caps.get(1)?.as_str().to_string())
}

/// Pull `(line, column)` out of a TOML parse error; column is 0 when absent.
pub fn extract_line_info(err_msg: &str) -> Option<(u32, u32)> {
    let re = Regex::new(r"line\s+(\d+)(?:\s*,?\s*column\s+(\d+))?").ok()?;
    let caps = re.captures(err_msg)?;
    let line = caps.get(1)?.as_str().parse().ok()?;
    let column = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some((line, column))
}

fn is_noise(line: &str) -> bool {
    line.len() <= 1
        || line
            .chars()
            .all(|c| c.is_whitespace() || matches!(c, '|' | '-' | ':' | '^'))
        || line.contains("confique")
        || line.contains("Error")
        || line.contains("from file")
        || line.contains(" = ")
        || line.starts_with("at ")
        || line.starts_with("TOML parse error")
}

/// Where a config file went wrong and what was wrong with it, stripped of
/// loader internals.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigErrorReport {
    pub location: String,
    pub message: String,
}

impl ConfigErrorReport {
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(inner) = source {
            chain.push(inner.to_string());
            source = inner.source();
        }
        let full = chain.join(": ");

        let message = full
            .lines()
            .map(str::trim)
            .find(|line| !is_noise(line))
            .or_else(|| {
                full.rsplit(':')
                    .map(str::trim)
                    .find(|part| !part.is_empty() && !is_noise(part))
            })
            .unwrap_or("invalid configuration")
            .to_string();

        let location = match (extract_filename(&full), extract_line_info(&full)) {
            (Some(file), Some((line, col))) => format!("{}:{}:{}", file, line, col),
            (Some(file), None) => file,
            (None, Some((line, col))) => format!("{}:{}", line, col),
            (None, None) => "unknown location".to_string(),
        };

        ConfigErrorReport { location, message }
    }

    pub fn invalid_value(location: &str, message: String) -> Self {
        ConfigErrorReport {
            location: location.to_string(),
            message,
        }
    }
}

impl fmt::Display for ConfigErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invalid configuration in {}", self.location)?;
        write!(f, "  {}", self.message)
    }
}

/// Report a config load failure on stderr and exit 1.
pub fn handle_config_load_error(err: impl std::error::Error) -> ! {
    eprintln!("{}", ConfigErrorReport::from_error(&err));
    std::process::exit(1);
}
