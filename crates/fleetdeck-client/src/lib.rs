// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use fleetdeck_app::{Order, Trip, UserAccount, Vehicle};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Blocking fetcher for the list screens' record collections. Each screen
/// loads its full collection once; there is no streaming and no retry
/// policy here -- a failed load surfaces to the calling shell.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("data.base_url must not be empty");
        }
        Url::parse(&base_url)
            .with_context(|| format!("data.base_url {base_url:?} is not a valid URL"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetch_trips(&self) -> Result<Vec<Trip>> {
        self.fetch_collection("trips")
    }

    pub fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.fetch_collection("vehicles")
    }

    pub fn fetch_users(&self) -> Result<Vec<UserAccount>> {
        self.fetch_collection("users")
    }

    pub fn fetch_orders(&self) -> Result<Vec<Order>> {
        self.fetch_collection("orders")
    }

    fn fetch_collection<T: DeserializeOwned>(&self, screen: &str) -> Result<Vec<T>> {
        let url = format!("{}/api/{screen}", self.base_url);
        let response = self.http.get(&url).send().with_context(|| {
            format!("fetch {url} -- check data.base_url and that the data service is running")
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            bail!("{url} returned 404 -- the data service does not serve this screen");
        }
        if !status.is_success() {
            bail!("{url} returned {status}");
        }

        response
            .json::<Vec<T>>()
            .with_context(|| format!("decode {screen} collection from {url}"))
    }
}
