use anyhow::{bail, Result};

pub const DEFAULT_OPERATION_COUNT: usize = 500;
pub const DEFAULT_PREDICTION_DAYS: u32 = 30;
pub const DEFAULT_BATCH_SIZE: usize = 100;

#[derive(Clone, Debug)]
pub struct SeederConfig {
    pub supabase_url: String,
    pub supabase_key: String,
    pub operation_count: usize,
    pub prediction_days: u32,
    pub batch_size: usize,
}

impl SeederConfig {
    pub fn from_env() -> Result<Self> {
        let supabase_url = required("SUPABASE_URL")?;
        let supabase_key = required("SUPABASE_KEY")?;

        // Tiny sanity check (fail fast, fail loud)
        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            bail!("SUPABASE_URL must start with http:// or https://");
        }

        let operation_count = optional("SEED_OPERATION_COUNT", DEFAULT_OPERATION_COUNT)?;
        let prediction_days = optional("SEED_PREDICTION_DAYS", DEFAULT_PREDICTION_DAYS)?;
        let batch_size = optional("SEED_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;

        if operation_count == 0 {
            bail!("SEED_OPERATION_COUNT must be >= 1");
        }
        if batch_size == 0 {
            bail!("SEED_BATCH_SIZE must be >= 1");
        }

        Ok(Self {
            supabase_url,
            supabase_key,
            operation_count,
            prediction_days,
            batch_size,
        })
    }
}

/// Required settings must be present and actually filled in; an unset var
/// or a `YOUR_...` placeholder left over from a config template both abort
/// before any network call.
fn required(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() && !is_placeholder(&v) => Ok(v),
        _ => bail!(
            "Missing required env var: {key}\n\
             Set both store settings before running:\n  \
             export SUPABASE_URL='https://<project>.supabase.co'\n  \
             export SUPABASE_KEY='<anon-or-service-key>'"
        ),
    }
}

fn is_placeholder(value: &str) -> bool {
    value.starts_with("YOUR_")
}

fn optional<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(v) => match v.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => bail!("{key} is not a valid number: {e}"),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_placeholders_are_not_valid_values() {
        assert!(is_placeholder("YOUR_SUPABASE_URL"));
        assert!(is_placeholder("YOUR_SUPABASE_ANON_KEY"));
        assert!(!is_placeholder("https://abc.supabase.co"));
    }
}
