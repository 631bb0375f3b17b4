//! Subscription Billing - plans, subscriptions and their lifecycle
//!
//! Billing core for a media-streaming platform. Plans carry a validated
//! name, price, currency and billing interval; subscriptions link a user to
//! a plan for a period and move through a status lifecycle.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
