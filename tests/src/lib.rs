//! Scenarios that cross the `solid-common` / `solid-core` boundary.

mod area {
    mod integration;
}

mod onboarding {
    mod integration;
}
