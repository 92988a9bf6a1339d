//! Typed access to resolved slash command options.

use serenity::all::{ResolvedOption, ResolvedValue};

use crate::{error::AppError, util::parse::MAX_STORED_COUNT};

/// Splits a subcommand invocation into its name and options.
pub fn subcommand<'a, 'b>(
    options: &'b [ResolvedOption<'a>],
) -> Option<(&'a str, &'b [ResolvedOption<'a>])> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::SubCommand(sub) => Some((option.name, sub.as_slice())),
        _ => None,
    })
}

pub fn get_str<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn get_int(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Integer(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn get_bool(options: &[ResolvedOption<'_>], name: &str) -> Option<bool> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Boolean(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn get_user_id(options: &[ResolvedOption<'_>], name: &str) -> Option<u64> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::User(user, _) if option.name == name => Some(user.id.get()),
        _ => None,
    })
}

pub fn get_role_id(options: &[ResolvedOption<'_>], name: &str) -> Option<u64> {
    options.iter().find_map(|option| match &option.value {
        ResolvedValue::Role(role) if option.name == name => Some(role.id.get()),
        _ => None,
    })
}

/// Converts an integer option into a count the database can store.
pub fn to_count(value: i64, name: &str) -> Result<u32, AppError> {
    u32::try_from(value)
        .ok()
        .filter(|count| *count <= MAX_STORED_COUNT)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "`{}` must be between 0 and {}.",
                name, MAX_STORED_COUNT
            ))
        })
}

/// Gets a required option, reporting a missing one as a bad request.
pub fn required<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing option `{}`.", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_counts() {
        assert_eq!(to_count(3, "limit").unwrap(), 3);
        assert!(matches!(to_count(-1, "limit"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_counts_too_large_to_store() {
        assert_eq!(
            to_count(i32::MAX as i64, "amount").unwrap(),
            MAX_STORED_COUNT
        );

        match to_count(i32::MAX as i64 + 1, "amount") {
            Err(AppError::BadRequest(msg)) => {
                assert_eq!(msg, "`amount` must be between 0 and 2147483647.")
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert!(to_count(u32::MAX as i64, "amount").is_err());
    }

    #[test]
    fn reports_missing_option_by_name() {
        match required::<&str>(None, "group") {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Missing option `group`."),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert_eq!(required(Some(5), "limit").unwrap(), 5);
    }
}
