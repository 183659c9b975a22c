//! Batch-create and delete calls.

use seed_core::{Customer, CustomerContact, Opportunity};
use tracing::info;

use crate::error::ApiError;

/// Async client for the remote CRM's batch endpoints.
pub struct CrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl CrmClient {
    /// Create a client for the given base URL (no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST a customer batch; returns the customers annotated with
    /// server-assigned `customer_id`s.
    pub async fn batch_create_customers(
        &self,
        customers: &[Customer],
    ) -> Result<Vec<Customer>, ApiError> {
        if customers.is_empty() {
            return Err(ApiError::EmptyBatch("customers"));
        }
        info!(count = customers.len(), "posting customers");

        let created: Vec<Customer> = self
            .http
            .post(self.endpoint("Customer/batch-create"))
            .json(customers)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if created.is_empty() {
            return Err(ApiError::EmptyResponse("customers"));
        }
        info!(count = created.len(), "customers created");
        Ok(created)
    }

    /// POST a customer-contact batch; returns the contacts annotated
    /// with server-assigned `contact_id`s.
    pub async fn batch_create_customer_contacts(
        &self,
        contacts: &[CustomerContact],
    ) -> Result<Vec<CustomerContact>, ApiError> {
        if contacts.is_empty() {
            return Err(ApiError::EmptyBatch("customer contacts"));
        }
        info!(count = contacts.len(), "posting customer contacts");

        let created: Vec<CustomerContact> = self
            .http
            .post(self.endpoint("CustomerContact/batch-create"))
            .json(contacts)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if created.is_empty() {
            return Err(ApiError::EmptyResponse("customer contacts"));
        }
        info!(count = created.len(), "customer contacts created");
        Ok(created)
    }

    /// POST an opportunity batch.
    pub async fn batch_create_opportunities(
        &self,
        opportunities: &[Opportunity],
    ) -> Result<Vec<Opportunity>, ApiError> {
        if opportunities.is_empty() {
            return Err(ApiError::EmptyBatch("opportunities"));
        }
        info!(count = opportunities.len(), "posting opportunities");

        let created: Vec<Opportunity> = self
            .http
            .post(self.endpoint("Opportunity/batch-create"))
            .json(opportunities)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(count = created.len(), "opportunities created");
        Ok(created)
    }

    /// DELETE one customer by server-assigned id.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<(), ApiError> {
        info!(customer_id, "deleting customer");
        self.http
            .delete(self.endpoint(&format!("Customer/{customer_id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// DELETE one customer contact by server-assigned id.
    pub async fn delete_customer_contact(&self, contact_id: &str) -> Result<(), ApiError> {
        info!(contact_id, "deleting customer contact");
        self.http
            .delete(self.endpoint(&format!("CustomerContact/{contact_id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = CrmClient::new("https://crm.example/api/");
        assert_eq!(
            client.endpoint("Customer/batch-create"),
            "https://crm.example/api/Customer/batch-create"
        );
    }

    #[tokio::test]
    async fn test_empty_batch_rejected_before_any_request() {
        let client = CrmClient::new("https://crm.example/api");
        let result = client.batch_create_customers(&[]).await;
        assert!(matches!(result, Err(ApiError::EmptyBatch("customers"))));
    }
}
