/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

/// Gets an environment variable or returns a default value if it is unset,
/// empty or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match get_env_non_empty(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

/// Gets an environment variable and parses it, returning `None` if it is
/// unset, empty or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    get_env_non_empty(env_var).and_then(|val| val.parse::<T>().ok())
}

/// Reads an environment variable, treating an empty value as unset
pub fn get_env_non_empty(env_var: &str) -> Option<String> {
    match env::var(env_var) {
        Ok(val) if !val.is_empty() => Some(val),
        Ok(_) => {
            debug!("{} is set but empty, ignoring it", env_var);
            None
        }
        Err(_) => None,
    }
}
