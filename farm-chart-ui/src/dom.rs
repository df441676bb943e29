//! Direct document access that has no RSX counterpart.

use farm_dashboard::Theme;

/// Mirror `theme` onto `<html data-theme="...">`. Light removes the attribute.
pub fn apply_theme_attribute(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else {
        log::warn!("No document element to apply theme to");
        return;
    };

    let result = match theme.data_theme() {
        Some(value) => root.set_attribute("data-theme", value),
        None => root.remove_attribute("data-theme"),
    };
    if let Err(e) = result {
        log::warn!("Failed to apply theme {:?}: {:?}", theme, e);
    }
}
