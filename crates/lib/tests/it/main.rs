/*! Integration tests for sticky-order.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - manager: add/remove/update/move through the OrderManager facade
 * - placement: hint ordering inside groups and sticky placement across groups
 * - cull: bounded persisted size under churn
 * - snapshot: immutability and independence of returned snapshots
 * - persistence: adapters, failing storage, reload
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("sticky_order=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod manager;
mod placement;
