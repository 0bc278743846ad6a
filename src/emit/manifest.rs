// Plugin manifest (META-INF/plugin.xml)
//
// Identifies the packaged theme to the host platform and points it at the
// theme descriptor. Every identifier here is a pure function of the theme
// name, so rebuilding the same input yields an identical manifest.

use crate::derive::DerivedColors;
use crate::theme::Theme;

/// Plugin version stamped into every generated manifest.
const PLUGIN_VERSION: &str = "1.0.0";

/// Render plugin.xml for a converted theme.
pub fn plugin_xml(theme: &Theme, d: &DerivedColors, vendor: &str) -> String {
    let display_name = theme.display_name();
    let plugin_id = theme.plugin_id();
    // Provider ids must be unique per plugin but there is no requirement
    // for randomness; deriving from the plugin id keeps builds reproducible
    let provider_id = format!("{plugin_id}.provider");
    let mode = if d.is_dark { "Dark" } else { "Light" };

    format!(
        r#"<idea-plugin>
  <id>{plugin_id}</id>
  <name>{display_name} Theme</name>
  <version>{version}</version>
  <vendor>{vendor}</vendor>
  <category>UI</category>

  <description><![CDATA[
    <h2>{display_name} Theme</h2>
    <p>An IDE theme converted from the Ghostty terminal theme collection.</p>

    <p><strong>Features:</strong></p>
    <ul>
      <li>Complete UI theme with color derivation from the terminal palette</li>
      <li>Editor color scheme optimized for code readability</li>
      <li>{mode} theme with harmonious color palette</li>
      <li>Syntax highlighting based on terminal ANSI colors</li>
      <li>Full styling for tool windows, borders, and all UI elements</li>
    </ul>

    <p>Original Ghostty theme: <code>{source}</code></p>
  ]]></description>

  <change-notes><![CDATA[
    <h3>Version {version}</h3>
    <ul>
      <li>Initial release</li>
      <li>Complete UI theme implementation</li>
      <li>Editor color scheme with syntax highlighting</li>
    </ul>
  ]]></change-notes>

  <idea-version since-build="193" until-build="999.*"/>

  <depends>com.intellij.modules.platform</depends>

  <extensions defaultExtensionNs="com.intellij">
    <themeProvider id="{provider_id}" path="/{source}.theme.json"/>
    <bundledColorScheme path="/{source}.xml"/>
  </extensions>
</idea-plugin>
"#,
        plugin_id = plugin_id,
        display_name = display_name,
        version = PLUGIN_VERSION,
        vendor = vendor,
        mode = mode,
        provider_id = provider_id,
        source = theme.name,
    )
}
