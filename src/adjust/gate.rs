use crate::model::ViewSize;
use log::debug;

/// Returns `true` if the file was saved on a screen of a different size, so
/// widgets may need to be moved to fit the current one.
///
/// A zero dimension on either side means the size is unknown and nothing is
/// adjusted.
pub fn needs_adjusting(feature_enabled: bool, file: ViewSize, current: ViewSize) -> bool {
    debug!("file: {}x{}", file.width, file.height);
    if !feature_enabled || file.width == 0 || file.height == 0 {
        return false;
    }
    debug!("app: {}x{}", current.width, current.height);
    if file == current || current.width == 0 || current.height == 0 {
        return false;
    }
    true
}
