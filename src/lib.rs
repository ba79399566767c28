//! SGA - Sistema de Gestión Académica
//!
//! Multi-campus school administration backend built on Actix Web.
//!
//! # Architecture
//! - `cache`: cache layer (in-memory Moka)
//! - `config`: configuration management
//! - `entity`: SeaORM database entities
//! - `errors`: unified error handling
//! - `middlewares`: authentication and role middleware
//! - `models`: data model definitions
//! - `routes`: API routing layer
//! - `runtime`: runtime lifecycle management
//! - `services`: business logic layer
//! - `storage`: persistence layer (SeaORM)
//! - `utils`: helper functions

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
