#[derive(Debug, Clone)]
pub struct ScanFridgeInput {
    pub image_data: Vec<u8>,
}
