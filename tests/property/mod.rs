#[path = "../integration/test_utils.rs"]
mod test_utils;
