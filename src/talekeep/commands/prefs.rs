use crate::commands::helpers::save_preferences_or_warn;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{FontContext, FontFamily, Theme};
use crate::store::StateStore;

/// Current preferences, with defaults for anything missing from storage.
pub fn show<S: StateStore>(store: &S) -> Result<CmdResult> {
    let prefs = store.load_preferences()?;
    Ok(CmdResult::default().with_preferences(prefs))
}

pub fn set_theme<S: StateStore>(store: &mut S, theme: Theme) -> Result<CmdResult> {
    let mut prefs = store.load_preferences()?;
    prefs.theme = theme;

    let mut result = CmdResult::default();
    save_preferences_or_warn(store, &prefs, &mut result);
    result.add_message(CmdMessage::success(format!("Switched to {} theme", theme)));
    result.preferences = Some(prefs);
    Ok(result)
}

pub fn set_font_family<S: StateStore>(store: &mut S, family: FontFamily) -> Result<CmdResult> {
    let mut prefs = store.load_preferences()?;
    prefs.font_family = family;

    let mut result = CmdResult::default();
    save_preferences_or_warn(store, &prefs, &mut result);
    result.add_message(CmdMessage::success(format!("Font family set to {}", family)));
    result.preferences = Some(prefs);
    Ok(result)
}

/// Clamped font-size adjustment for one context. The resulting size comes
/// back in `CmdResult::font_px` so the caller can refresh its display
/// without a second read.
pub fn adjust_font<S: StateStore>(
    store: &mut S,
    ctx: FontContext,
    delta: i32,
) -> Result<CmdResult> {
    let mut prefs = store.load_preferences()?;
    let new_size = prefs.adjust_font(ctx, delta);

    let mut result = CmdResult::default();
    save_preferences_or_warn(store, &prefs, &mut result);
    result.font_px = Some(new_size);
    result.add_message(CmdMessage::success(format!("Font size: {}px", new_size)));
    result.preferences = Some(prefs);
    Ok(result)
}

pub fn reset_font<S: StateStore>(store: &mut S, ctx: FontContext) -> Result<CmdResult> {
    let mut prefs = store.load_preferences()?;
    let new_size = prefs.reset_font(ctx);

    let mut result = CmdResult::default();
    save_preferences_or_warn(store, &prefs, &mut result);
    result.font_px = Some(new_size);
    result.add_message(CmdMessage::success(format!(
        "Font size reset to {}px",
        new_size
    )));
    result.preferences = Some(prefs);
    Ok(result)
}
