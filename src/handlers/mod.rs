// handlers/mod.rs - two security tiers
//
// Public (no auth): navigation tree and breadcrumbs under /api/navigation/*
// Protected (identity-provider token): profiles and teams under /api/users/*, /api/teams/*
pub mod protected;
pub mod public;
