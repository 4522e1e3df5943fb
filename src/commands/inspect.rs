//! Implementations of the `scene`, `theme` and `brands` inspection commands.

use super::{print_json, random_source};
use crate::cli::{BrandsArgs, SceneArgs, ThemeArgs};
use promode::brands::{MIXED_BRAND_RULE, select_brands};
use promode::config::Config;
use promode::error::{PromodeError, Result};
use promode::scene::extract_scene;
use promode::theme::{Theme, detect_theme};

/// Execute the `promode scene` command.
pub fn cmd_scene(args: SceneArgs) -> Result<()> {
    print_json(&extract_scene(&args.description))
}

/// Execute the `promode theme` command.
pub fn cmd_theme(args: ThemeArgs) -> Result<()> {
    println!("{}", detect_theme(&args.text));
    Ok(())
}

/// Execute the `promode brands` command.
pub fn cmd_brands(config: &Config, args: BrandsArgs) -> Result<()> {
    let category = args
        .category
        .as_deref()
        .unwrap_or(config.default_category.as_str());
    let theme = resolve_theme(args.theme.as_deref(), args.user_request.as_deref())?;

    let mut rng = random_source(args.seed);
    let selection = select_brands(category, theme, args.user_request.as_deref(), rng.as_mut());

    println!("Category:   {}", category);
    println!("Theme:      {}", theme);
    println!("Accessible: {}", selection.accessible.join(", "));
    match &selection.luxury {
        Some(luxury) => println!("Luxury:     {} ({})", luxury, MIXED_BRAND_RULE),
        None => println!("Luxury:     none"),
    }
    Ok(())
}

fn resolve_theme(theme: Option<&str>, user_request: Option<&str>) -> Result<Theme> {
    match theme {
        Some(name) => Theme::from_str(name)
            .ok_or_else(|| PromodeError::UserError(format!("unknown theme '{}'", name))),
        None => Ok(detect_theme(user_request.unwrap_or_default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_theme_explicit() {
        assert_eq!(resolve_theme(Some("Beach"), None).unwrap(), Theme::Beach);
        assert!(resolve_theme(Some("space"), None).is_err());
    }

    #[test]
    fn test_resolve_theme_detected_from_request() {
        assert_eq!(
            resolve_theme(None, Some("a yoga morning")).unwrap(),
            Theme::Workout
        );
        assert_eq!(resolve_theme(None, None).unwrap(), Theme::Lifestyle);
    }
}
