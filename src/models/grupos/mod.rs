pub mod entities;
pub mod kpi;
pub mod requests;
pub mod responses;
