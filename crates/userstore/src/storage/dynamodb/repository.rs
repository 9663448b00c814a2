//! DynamoDB repository implementation.
//!
//! Implements `UserRepository` from `userstore_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use userstore_core::storage::{Result, UserRepository};
use userstore_core::user::{UpdateUser, User};

use super::conversions::{item_to_user, user_key, user_to_item, ATTR_ID, ENTITY_TYPE_USER};
use super::error::{
    map_build_error, map_create_table_error, map_delete_item_error, map_get_item_error,
    map_put_item_error, map_scan_error, map_update_item_error,
};
use super::expressions::user_update;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn ensure_schema(&self) -> Result<()> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name(ATTR_ID)
            .key_type(KeyType::Hash)
            .build()
            .map_err(map_build_error)?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(ATTR_ID)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(map_build_error)?;

        match self
            .client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => map_create_table_error(err),
        }
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let item = user_to_item(user);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, user_key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let mut users = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // A single Scan call returns at most 1 MB, keep reading until the
        // table is exhausted.
        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in page.items.unwrap_or_default() {
                users.push(item_to_user(&item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(users)
    }

    async fn update_user(&self, id: &str, update: &UpdateUser) -> Result<()> {
        let expression = user_update(update);

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, user_key(id))
            .update_expression(expression.update_expression)
            .condition_expression(expression.condition_expression)
            .set_expression_attribute_names(Some(expression.names))
            .set_expression_attribute_values(Some(expression.values))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, ENTITY_TYPE_USER, id))?;

        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, user_key(id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
