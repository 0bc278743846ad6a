// UI theme descriptor (.theme.json)
//
// Serializes the base + derived colors into the JSON structure the IDE's
// theme provider reads: global defaults, per-widget overrides, and an icon
// palette block. Key order in the output is alphabetical (serde_json map
// ordering), which keeps the artifact deterministic.

use crate::color::Rgb;
use crate::derive::{directional, DerivedColors, FILE_COLOR_BLEND};
use crate::theme::Theme;
use serde_json::{json, Value};

// Fixed tint sources for the editor-tab file colors that have no palette slot.
const TINT_VIOLET: Rgb = Rgb::new(0x93, 0x70, 0xdb);
const TINT_ORANGE: Rgb = Rgb::new(0xff, 0xa5, 0x00);
const TINT_ROSE: Rgb = Rgb::new(0xff, 0x00, 0x7f);

/// Build the full `.theme.json` document.
pub fn ui_theme_json(theme: &Theme, d: &DerivedColors) -> Value {
    let dark = d.is_dark;
    let bg = theme.background;
    let fg = theme.foreground;

    json!({
        "name": theme.display_name(),
        "dark": dark,
        "author": "ghostforge",
        "editorScheme": format!("/{}.xml", theme.name),
        "background": {
            "default": bg.to_hex()
        },
        "colors": {
            "primaryBackground": bg.to_hex(),
            "primaryForeground": fg.to_hex(),
            "selectionBackground": theme.selection_background.to_hex(),
            "selectionForeground": theme.selection_foreground.to_hex(),
            "cursorColor": theme.cursor_color.to_hex(),
            "cursorTextColor": theme.cursor_text.to_hex(),
            "accentColor": d.accent.to_hex(),
            "secondaryAccentColor": d.accent_secondary.to_hex(),
        },
        "ui": ui_colors(theme, d),
        "icons": {
            "ColorPalette": {
                "Actions.Blue": d.accent.to_hex(),
                "Actions.Green": d.success.to_hex(),
                "Actions.Grey": directional(fg, -0.3, dark).to_hex(),
                "Actions.Red": d.error.to_hex(),
                "Actions.Yellow": d.warning.to_hex(),
                "Objects.Blue": d.accent.to_hex(),
                "Objects.Green": d.success.to_hex(),
                "Objects.Grey": directional(fg, -0.3, dark).to_hex(),
                "Objects.Pink": d.syntax.keyword.to_hex(),
                "Objects.Purple": d.syntax.keyword.to_hex(),
                "Objects.Red": d.error.to_hex(),
                "Objects.Yellow": d.warning.to_hex(),
                "Objects.BlackText": "#000000",
                "Objects.WhiteText": "#ffffff",
            }
        }
    })
}

/// The semantic UI-element color map.
///
/// Widget-specific sub-shades reuse the derived base shades with small
/// directional offsets, mirroring the derivation policy's dark/light flip.
fn ui_colors(theme: &Theme, d: &DerivedColors) -> Value {
    let dark = d.is_dark;
    let bg = theme.background;
    let fg = theme.foreground;
    let sel_bg = theme.selection_background;
    let sel_fg = theme.selection_foreground;

    let panel = d.panel_background;
    let border = d.border;
    let hover = d.hover_background;

    // One step lighter than the background, used for contrast borders
    let lighter_bg = bg.adjust_brightness(if dark { 0.2 } else { -0.1 });

    json!({
        // Global defaults
        "*": {
            "background": bg.to_hex(),
            "foreground": fg.to_hex(),
            "infoForeground": directional(fg, -0.3, dark).to_hex(),
            "selectionBackground": sel_bg.to_hex(),
            "selectionForeground": sel_fg.to_hex(),
            "selectionInactiveBackground": d.selection_inactive.to_hex(),
            "selectionBackgroundInactive": d.selection_inactive.to_hex(),
            "disabledForeground": d.disabled_foreground.to_hex(),
            "disabledBackground": directional(bg, -0.05, dark).to_hex(),
            "acceleratorForeground": d.accent.to_hex(),
            "acceleratorSelectionForeground": d.accent.to_hex(),
            "errorForeground": d.error.to_hex(),
            "borderColor": border.to_hex(),
            "disabledBorderColor": directional(border, -0.3, dark).to_hex(),
            "focusColor": d.accent.to_hex(),
            "focusedBorderColor": d.accent.to_hex(),
            "separatorColor": border.to_hex(),
        },

        // Main window and panels
        "Window.background": bg.to_hex(),
        "Panel.background": panel.to_hex(),
        "Window.border": lighter_bg.to_hex(),
        "Dialog.background": panel.to_hex(),
        "Dialog.foreground": fg.to_hex(),
        "Dialog.borderColor": border.to_hex(),
        "DialogWrapper.southPanelBackground": panel.to_hex(),
        "OnePixelDivider.background": border.to_hex(),
        "Borders.color": border.to_hex(),
        "Borders.ContrastBorderColor": lighter_bg.to_hex(),

        // Tool windows
        "ToolWindow.background": panel.to_hex(),
        "ToolWindow.header.background": directional(panel, 0.05, dark).to_hex(),
        "ToolWindow.header.active.background": directional(panel, 0.1, dark).to_hex(),
        "ToolWindow.header.border.background": lighter_bg.to_hex(),
        "ToolWindow.header.closeButton.background": panel.to_hex(),
        "ToolWindow.Button.selectedBackground": hover.to_hex(),
        "ToolWindow.Button.hoverBackground": hover.to_hex(),
        "ToolWindow.Button.selectedForeground": fg.to_hex(),
        "ToolWindow.HeaderTab.selectedBackground": directional(panel, 0.15, dark).to_hex(),
        "ToolWindow.HeaderTab.selectedInactiveBackground": directional(panel, 0.05, dark).to_hex(),
        "ToolWindow.HeaderTab.hoverBackground": hover.to_hex(),
        "ToolWindow.HeaderTab.hoverInactiveBackground": directional(hover, -0.05, dark).to_hex(),
        "ToolWindow.HeaderCloseButton.background": panel.to_hex(),

        // Editor
        "Editor.background": bg.to_hex(),
        "EditorPane.background": bg.to_hex(),
        "EditorPane.inactiveBackground": d.inactive_background.to_hex(),
        "EditorGroupsTabs.background": panel.to_hex(),
        "EditorTabs.background": panel.to_hex(),
        "EditorTabs.borderColor": border.to_hex(),
        "EditorTabs.underlineColor": d.accent.to_hex(),
        "EditorTabs.underlinedTabBackground": directional(panel, 0.1, dark).to_hex(),
        "EditorTabs.hoverBackground": hover.to_hex(),
        "EditorTabs.inactiveUnderlineColor": directional(d.accent, -0.3, dark).to_hex(),
        "FileColor.Yellow": bg.blend(d.warning, FILE_COLOR_BLEND).to_hex(),
        "FileColor.Green": bg.blend(d.success, FILE_COLOR_BLEND).to_hex(),
        "FileColor.Blue": bg.blend(d.accent, FILE_COLOR_BLEND).to_hex(),
        "FileColor.Violet": bg.blend(TINT_VIOLET, FILE_COLOR_BLEND).to_hex(),
        "FileColor.Orange": bg.blend(TINT_ORANGE, FILE_COLOR_BLEND).to_hex(),
        "FileColor.Rose": bg.blend(TINT_ROSE, FILE_COLOR_BLEND).to_hex(),

        // Menus
        "Menu.background": panel.to_hex(),
        "Menu.foreground": fg.to_hex(),
        "Menu.borderColor": border.to_hex(),
        "Menu.acceleratorForeground": directional(fg, -0.2, dark).to_hex(),
        "Menu.selectionBackground": hover.to_hex(),
        "Menu.selectionForeground": fg.to_hex(),
        "MenuItem.acceleratorForeground": directional(fg, -0.2, dark).to_hex(),
        "MenuItem.selectionBackground": hover.to_hex(),
        "MenuItem.selectionForeground": fg.to_hex(),
        "PopupMenu.background": panel.to_hex(),
        "PopupMenu.borderColor": border.to_hex(),
        "MenuBar.background": bg.to_hex(),
        "MenuBar.borderColor": border.to_hex(),

        // UI controls
        "Button.background": panel.to_hex(),
        "Button.foreground": fg.to_hex(),
        "Button.hoverBackground": hover.to_hex(),
        "Button.pressedBackground": d.pressed_background.to_hex(),
        "Button.focusedBorderColor": d.accent.to_hex(),
        "Button.default.foreground": fg.to_hex(),
        "Button.default.background": d.accent.to_hex(),
        "Button.default.hoverBackground": directional(d.accent, 0.1, dark).to_hex(),
        "Button.default.pressedBackground": d.accent_secondary.to_hex(),
        "Button.default.focusedBorderColor": directional(d.accent, 0.2, dark).to_hex(),
        "CheckBox.background": bg.to_hex(),
        "CheckBox.foreground": fg.to_hex(),
        "CheckBox.select": d.accent.to_hex(),
        "ComboBox.background": bg.to_hex(),
        "ComboBox.foreground": fg.to_hex(),
        "ComboBox.selectionBackground": hover.to_hex(),
        "ComboBox.selectionForeground": fg.to_hex(),
        "ComboBox.disabledBackground": directional(bg, -0.05, dark).to_hex(),
        "ComboBox.ArrowButton.background": panel.to_hex(),
        "ComboBox.ArrowButton.iconColor": fg.to_hex(),
        "Component.borderColor": border.to_hex(),
        "Component.focusedBorderColor": d.accent.to_hex(),
        "Component.disabledBorderColor": directional(border, -0.3, dark).to_hex(),
        "Component.errorFocusColor": d.error.to_hex(),
        "Component.inactiveErrorFocusColor": directional(d.error, -0.3, dark).to_hex(),
        "Component.warningFocusColor": d.warning.to_hex(),
        "Component.inactiveWarningFocusColor": directional(d.warning, -0.3, dark).to_hex(),
        "Link.activeForeground": d.accent.to_hex(),
        "Link.hoverForeground": d.accent.to_hex(),
        "Link.pressedForeground": d.accent.to_hex(),
        "Link.visitedForeground": d.accent_tertiary.to_hex(),
        "ToggleButton.background": panel.to_hex(),
        "ToggleButton.foreground": fg.to_hex(),
        "ToggleButton.onBackground": d.accent.to_hex(),
        "ToggleButton.onForeground": (if dark { "#ffffff" } else { "#000000" }),
        "ToggleButton.offBackground": directional(panel, -0.1, dark).to_hex(),
        "ToggleButton.offForeground": fg.to_hex(),
        "ToggleButton.buttonColor": fg.to_hex(),

        // Trees and lists
        "Tree.background": bg.to_hex(),
        "Tree.foreground": fg.to_hex(),
        "Tree.selectionBackground": sel_bg.to_hex(),
        "Tree.selectionForeground": sel_fg.to_hex(),
        "Tree.selectionInactiveBackground": d.selection_inactive.to_hex(),
        "Tree.rowHeight": 20,
        "List.background": bg.to_hex(),
        "List.foreground": fg.to_hex(),
        "List.selectionBackground": sel_bg.to_hex(),
        "List.selectionForeground": sel_fg.to_hex(),
        "List.selectionInactiveBackground": d.selection_inactive.to_hex(),
        "Table.background": bg.to_hex(),
        "Table.foreground": fg.to_hex(),
        "Table.selectionBackground": sel_bg.to_hex(),
        "Table.selectionForeground": sel_fg.to_hex(),
        "Table.stripeColor": directional(bg, 0.05, dark).to_hex(),
        "Table.gridColor": border.to_hex(),

        // Text fields
        "TextField.background": bg.to_hex(),
        "TextField.foreground": fg.to_hex(),
        "TextField.selectionBackground": sel_bg.to_hex(),
        "TextField.selectionForeground": sel_fg.to_hex(),
        "TextArea.background": bg.to_hex(),
        "TextArea.foreground": fg.to_hex(),
        "TextArea.selectionBackground": sel_bg.to_hex(),
        "TextArea.selectionForeground": sel_fg.to_hex(),
        "FormattedTextField.background": bg.to_hex(),
        "PasswordField.background": bg.to_hex(),
        "TextPane.background": bg.to_hex(),
        "TextPane.foreground": fg.to_hex(),
        "EditorPane.selectionBackground": sel_bg.to_hex(),

        // Separators and tabbed panes
        "Separator.foreground": border.to_hex(),
        "Separator.separatorColor": border.to_hex(),
        "TabbedPane.tabSelectionHeight": 2,
        "TabbedPane.tabAreaBackground": panel.to_hex(),
        "TabbedPane.background": bg.to_hex(),
        "TabbedPane.underlineColor": d.accent.to_hex(),
        "TabbedPane.hoverColor": hover.to_hex(),
        "TabbedPane.contentAreaColor": border.to_hex(),

        // Status bar
        "StatusBar.background": panel.to_hex(),
        "StatusBar.foreground": fg.to_hex(),
        "StatusBar.borderColor": border.to_hex(),
        "StatusBar.hoverBackground": hover.to_hex(),

        // Progress bar
        "ProgressBar.background": panel.to_hex(),
        "ProgressBar.foreground": d.accent.to_hex(),
        "ProgressBar.progressColor": d.accent.to_hex(),
        "ProgressBar.indeterminateStartColor": d.accent.to_hex(),
        "ProgressBar.indeterminateEndColor": d.accent_secondary.to_hex(),

        // Scroll bar
        "ScrollBar.background": bg.to_hex(),
        "ScrollBar.thumbColor": d.scrollbar_thumb.to_hex(),
        "ScrollBar.thumbBorderColor": directional(bg, 0.4, dark).to_hex(),
        "ScrollBar.hoverThumbColor": directional(bg, 0.4, dark).to_hex(),
        "ScrollBar.hoverThumbBorderColor": directional(bg, 0.5, dark).to_hex(),
        "ScrollBar.trackColor": bg.to_hex(),
        "ScrollBar.Mac.hoverThumbColor": directional(bg, 0.4, dark).to_hex(),
        "ScrollBar.Mac.thumbColor": d.scrollbar_thumb.to_hex(),

        // Search
        "SearchEverywhere.background": panel.to_hex(),
        "SearchEverywhere.foreground": fg.to_hex(),
        "SearchEverywhere.Tab.selectedBackground": hover.to_hex(),
        "SearchEverywhere.Tab.selectedForeground": fg.to_hex(),
        "SearchEverywhere.SearchField.background": bg.to_hex(),
        "SearchEverywhere.SearchField.borderColor": border.to_hex(),
        "SearchEverywhere.List.separatorColor": border.to_hex(),
        "SearchMatch.startBackground": bg.blend(d.accent, 0.3).to_hex(),
        "SearchMatch.endBackground": bg.blend(d.accent, 0.1).to_hex(),
        "SpeedSearch.background": d.highlight_background.to_hex(),

        // Notifications
        "Notification.background": panel.to_hex(),
        "Notification.foreground": fg.to_hex(),
        "Notification.borderColor": border.to_hex(),
        "Notification.errorBackground": d.notification_error_background.to_hex(),
        "Notification.errorBorderColor": d.error.to_hex(),
        "Notification.errorForeground": fg.to_hex(),
        "Notification.warningBackground": d.notification_warning_background.to_hex(),
        "Notification.warningBorderColor": d.warning.to_hex(),
        "Notification.warningForeground": fg.to_hex(),
        "Notification.infoBackground": d.notification_info_background.to_hex(),
        "Notification.infoBorderColor": d.accent.to_hex(),
        "Notification.infoForeground": fg.to_hex(),

        // Tooltips
        "ToolTip.background": panel.to_hex(),
        "ToolTip.foreground": fg.to_hex(),
        "ToolTip.borderColor": border.to_hex(),
        "ValidationTooltip.errorBackground": d.error.to_hex(),
        "ValidationTooltip.errorBorderColor": directional(d.error, 0.2, dark).to_hex(),
        "ValidationTooltip.warningBackground": d.warning.to_hex(),
        "ValidationTooltip.warningBorderColor": directional(d.warning, 0.2, dark).to_hex(),

        // Icons
        "Icons.foreground": fg.to_hex(),
        "Icons.greyForeground": directional(fg, -0.3, dark).to_hex(),
        "Icons.redForeground": d.error.to_hex(),
        "Icons.greenForeground": d.success.to_hex(),
        "Icons.blueForeground": d.accent.to_hex(),
        "Icons.yellowForeground": d.warning.to_hex(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use crate::theme::parse_theme_str;

    #[test]
    fn test_descriptor_carries_base_colors() {
        let theme = parse_theme_str(
            "dusk",
            "background = #1e1e1e\nforeground = #d4d4d4\npalette = 4=#569cd6\n",
        );
        let derived = derive(&theme);
        let doc = ui_theme_json(&theme, &derived);

        assert_eq!(doc["dark"], true);
        assert_eq!(doc["name"], "Dusk");
        assert_eq!(doc["editorScheme"], "/dusk.xml");
        assert_eq!(doc["colors"]["primaryBackground"], "#1e1e1e");
        assert_eq!(doc["colors"]["accentColor"], "#569cd6");
        assert_eq!(doc["ui"]["Editor.background"], "#1e1e1e");
        assert_eq!(doc["ui"]["*"]["foreground"], "#d4d4d4");
    }

    #[test]
    fn test_notification_keys_match_derived_blends() {
        let theme = parse_theme_str("n", "background = #101010\npalette = 1=#cc3333\n");
        let derived = derive(&theme);
        let doc = ui_theme_json(&theme, &derived);

        assert_eq!(
            doc["ui"]["Notification.errorBackground"],
            derived.notification_error_background.to_hex()
        );
        assert_eq!(doc["ui"]["Notification.errorBorderColor"], "#cc3333");
    }

    #[test]
    fn test_toggle_foreground_tracks_classification() {
        let dark = parse_theme_str("d", "background = #000000\n");
        let light = parse_theme_str("l", "background = #ffffff\n");
        let dark_doc = ui_theme_json(&dark, &derive(&dark));
        let light_doc = ui_theme_json(&light, &derive(&light));

        assert_eq!(dark_doc["ui"]["ToggleButton.onForeground"], "#ffffff");
        assert_eq!(light_doc["ui"]["ToggleButton.onForeground"], "#000000");
    }
}
