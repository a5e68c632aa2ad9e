//! Schedule operations.
//!
//! Provides CRUD and lifecycle control for recurring captures.

use super::http::HttpTransport;
use crate::error::Error;
use crate::types::{
    CreateScheduleRequest, Schedule, ScheduleHistory, ScheduleList, UpdateScheduleRequest,
};

/// Schedules API group.
#[derive(Debug, Clone)]
pub struct SchedulesApi {
    transport: HttpTransport,
}

impl SchedulesApi {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Creates a recurring capture schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, request: &CreateScheduleRequest) -> Result<Schedule, Error> {
        self.transport.post_json("/v1/schedules", request).await
    }

    /// Lists all schedules.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<ScheduleList, Error> {
        self.transport.get_json("/v1/schedules").await
    }

    /// Gets a schedule by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the schedule does not exist.
    pub async fn get(&self, schedule_id: &str) -> Result<Schedule, Error> {
        self.transport
            .get_json(&format!("/v1/schedules/{schedule_id}"))
            .await
    }

    /// Applies a partial update to a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the schedule does not exist.
    pub async fn update(
        &self,
        schedule_id: &str,
        request: &UpdateScheduleRequest,
    ) -> Result<Schedule, Error> {
        self.transport
            .put_json(&format!("/v1/schedules/{schedule_id}"), request)
            .await
    }

    /// Deletes a schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the schedule does not exist.
    pub async fn delete(&self, schedule_id: &str) -> Result<(), Error> {
        self.transport
            .delete(&format!("/v1/schedules/{schedule_id}"))
            .await
    }

    /// Pauses an active schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn pause(&self, schedule_id: &str) -> Result<Schedule, Error> {
        self.transport
            .post_empty(&format!("/v1/schedules/{schedule_id}/pause"))
            .await
    }

    /// Resumes a paused schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn resume(&self, schedule_id: &str) -> Result<Schedule, Error> {
        self.transport
            .post_empty(&format!("/v1/schedules/{schedule_id}/resume"))
            .await
    }

    /// Triggers an immediate execution outside the cron cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn trigger(&self, schedule_id: &str) -> Result<Schedule, Error> {
        self.transport
            .post_empty(&format!("/v1/schedules/{schedule_id}/trigger"))
            .await
    }

    /// Gets the execution history of a schedule, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the schedule does not exist.
    pub async fn history(
        &self,
        schedule_id: &str,
        limit: Option<u32>,
    ) -> Result<ScheduleHistory, Error> {
        let path = match limit {
            Some(l) => format!("/v1/schedules/{schedule_id}/history?limit={l}"),
            None => format!("/v1/schedules/{schedule_id}/history"),
        };
        self.transport.get_json(&path).await
    }
}
