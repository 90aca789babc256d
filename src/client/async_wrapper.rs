//! Async wrapper around synchronous BrregClient.
//!
//! This module provides an async interface to the synchronous BrregClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::BrregClient;
use crate::domain::Organisasjonsnummer;
use crate::error::{BrregError, BrregResult};
use crate::models::{Enhet, Underenhet};
use crate::query::{EnhetQuery, Page, UnderenhetQuery};
use async_trait::async_trait;
use std::sync::Arc;

/// Async version of the registry operations.
#[async_trait]
pub trait AsyncBrregClient: Send + Sync {
    async fn get_enhet(&self, organisasjonsnummer: &Organisasjonsnummer)
        -> BrregResult<Option<Enhet>>;

    async fn get_underenhet(
        &self,
        organisasjonsnummer: &Organisasjonsnummer,
    ) -> BrregResult<Option<Underenhet>>;

    async fn search_enheter(&self, query: &EnhetQuery) -> BrregResult<Page<EnhetQuery>>;

    async fn search_underenheter(
        &self,
        query: &UnderenhetQuery,
    ) -> BrregResult<Page<UnderenhetQuery>>;
}

/// Async wrapper around synchronous BrregClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncBrregClientImpl {
    client: Arc<BrregClient>,
}

impl AsyncBrregClientImpl {
    pub fn new(client: BrregClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> BrregError {
    BrregError::Other(anyhow::anyhow!("Task join error: {}", e))
}

#[async_trait]
impl AsyncBrregClient for AsyncBrregClientImpl {
    async fn get_enhet(
        &self,
        organisasjonsnummer: &Organisasjonsnummer,
    ) -> BrregResult<Option<Enhet>> {
        let client = self.client.clone();
        let organisasjonsnummer = organisasjonsnummer.clone();

        tokio::task::spawn_blocking(move || client.get_enhet(&organisasjonsnummer))
            .await
            .map_err(join_error)?
    }

    async fn get_underenhet(
        &self,
        organisasjonsnummer: &Organisasjonsnummer,
    ) -> BrregResult<Option<Underenhet>> {
        let client = self.client.clone();
        let organisasjonsnummer = organisasjonsnummer.clone();

        tokio::task::spawn_blocking(move || client.get_underenhet(&organisasjonsnummer))
            .await
            .map_err(join_error)?
    }

    async fn search_enheter(&self, query: &EnhetQuery) -> BrregResult<Page<EnhetQuery>> {
        let client = self.client.clone();
        let query = query.clone();

        tokio::task::spawn_blocking(move || client.search(&query))
            .await
            .map_err(join_error)?
    }

    async fn search_underenheter(
        &self,
        query: &UnderenhetQuery,
    ) -> BrregResult<Page<UnderenhetQuery>> {
        let client = self.client.clone();
        let query = query.clone();

        tokio::task::spawn_blocking(move || client.search(&query))
            .await
            .map_err(join_error)?
    }
}
