//! Core logic for the meal planner: prompt construction, the inference
//! endpoint client, and the reuse/day-plan orchestration flows.

pub mod generator;
pub mod meal;
