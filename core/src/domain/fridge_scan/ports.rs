use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fridge_scan::{entities::FridgeScanResult, value_objects::ScanFridgeInput},
};

/// Service trait for fridge-scan business logic
#[cfg_attr(test, mockall::automock)]
pub trait FridgeScanService: Send + Sync {
    fn scan_fridge(
        &self,
        input: ScanFridgeInput,
    ) -> impl Future<Output = Result<FridgeScanResult, CoreError>> + Send;
}
