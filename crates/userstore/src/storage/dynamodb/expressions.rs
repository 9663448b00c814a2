//! DynamoDB expression construction.
//!
//! Pure builders for the expression strings and placeholder maps sent with
//! write requests. Attribute names always go through `#` placeholders because
//! `name` is a DynamoDB reserved word.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use userstore_core::user::UpdateUser;

use super::conversions::{ATTR_EMAIL, ATTR_ID, ATTR_NAME};

/// The parts of a conditional UpdateItem request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalUpdate {
    pub update_expression: String,
    pub condition_expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Builds the update that replaces `name` and `email`, guarded so it only
/// applies to an item that already exists.
pub fn user_update(update: &UpdateUser) -> ConditionalUpdate {
    let names = HashMap::from([
        ("#id".to_string(), ATTR_ID.to_string()),
        ("#name".to_string(), ATTR_NAME.to_string()),
        ("#email".to_string(), ATTR_EMAIL.to_string()),
    ]);

    let values = HashMap::from([
        (":name".to_string(), AttributeValue::S(update.name.clone())),
        (":email".to_string(), AttributeValue::S(update.email.clone())),
    ]);

    ConditionalUpdate {
        update_expression: "SET #name = :name, #email = :email".to_string(),
        condition_expression: "attribute_exists(#id)".to_string(),
        names,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_update() -> UpdateUser {
        UpdateUser {
            name: "Ana B".to_string(),
            email: "ana@x.com".to_string(),
        }
    }

    #[test]
    fn test_update_expression_sets_name_and_email() {
        let update = user_update(&sample_update());

        assert_eq!(update.update_expression, "SET #name = :name, #email = :email");
        assert_eq!(update.condition_expression, "attribute_exists(#id)");
    }

    #[test]
    fn test_every_placeholder_is_bound() {
        let update = user_update(&sample_update());
        let expressions = format!(
            "{} {}",
            update.update_expression, update.condition_expression
        );

        for name in update.names.keys() {
            assert!(expressions.contains(name.as_str()), "unused name {name}");
        }
        for value in update.values.keys() {
            assert!(expressions.contains(value.as_str()), "unused value {value}");
        }
    }

    #[test]
    fn test_names_resolve_to_attributes() {
        let update = user_update(&sample_update());

        assert_eq!(update.names["#id"], "id");
        assert_eq!(update.names["#name"], "name");
        assert_eq!(update.names["#email"], "email");
    }

    #[test]
    fn test_values_carry_the_request() {
        let update = user_update(&sample_update());

        assert_eq!(update.values[":name"].as_s().unwrap(), "Ana B");
        assert_eq!(update.values[":email"].as_s().unwrap(), "ana@x.com");
        assert_eq!(update.values.len(), 2);
    }
}
