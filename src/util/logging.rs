// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logging utilities
//!
//! The library only emits through the `log` facade; these helpers install
//! `env_logger` for binaries and tests that want to see the output.

/// Initialize logging from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Initialize logging with a fixed level, still honouring `RUST_LOG` overrides
pub fn init_logging_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

/// Initialize logging for tests, routing output through the test harness
pub fn init_test_logging() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

#[macro_export]
macro_rules! fieldstats_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "fieldstats", $($arg)*)
    };
}

#[macro_export]
macro_rules! fieldstats_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "fieldstats", $($arg)*)
    };
}

#[macro_export]
macro_rules! fieldstats_trace {
    ($($arg:tt)*) => {
        log::trace!(target: "fieldstats", $($arg)*)
    };
}
