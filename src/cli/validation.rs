use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.base_url.as_deref() {
        let parsed = reqwest::Url::parse(raw)
            .map_err(|e| format!("invalid --base-url '{raw}': {e}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("invalid --base-url '{raw}': expected http or https"));
        }
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid timeout, expected positive integer".to_string());
        }
    }
    Ok(())
}
