//! Static platform assets: the web shell and desktop runner placeholders

use super::{TemplateFile, Vars};
use crate::config::Platform;

pub const WEB_INDEX_PATH: &str = "web/index.html";
pub const WEB_MANIFEST_PATH: &str = "web/manifest.json";

const WEB_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head>
  <base href="$FLUTTER_BASE_HREF">

  <meta charset="UTF-8">
  <meta content="IE=Edge" http-equiv="X-UA-Compatible">
  <meta name="description" content="{{app_title}}">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">

  <meta name="mobile-web-app-capable" content="yes">
  <meta name="apple-mobile-web-app-status-bar-style" content="black">
  <meta name="apple-mobile-web-app-title" content="{{app_title}}">
  <link rel="apple-touch-icon" href="icons/Icon-192.png">
  <link rel="icon" type="image/png" href="favicon.png"/>

  <title>{{app_title}}</title>
  <link rel="manifest" href="manifest.json">
</head>
<body>
  <script src="flutter_bootstrap.js" async></script>
</body>
</html>
"#;

const WEB_MANIFEST: &str = r##"{
  "name": "{{app_title}}",
  "short_name": "{{app_title}}",
  "start_url": ".",
  "display": "standalone",
  "background_color": "#FFFFFF",
  "theme_color": "#3F51B5",
  "description": "{{app_title}}, generated by flutter-blueprint.",
  "orientation": "any",
  "prefer_related_applications": false,
  "icons": [
    {
      "src": "icons/Icon-192.png",
      "sizes": "192x192",
      "type": "image/png"
    },
    {
      "src": "icons/Icon-512.png",
      "sizes": "512x512",
      "type": "image/png"
    }
  ]
}
"##;

pub fn web_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new(WEB_INDEX_PATH, |config| Vars::app(config).render(WEB_INDEX)),
        TemplateFile::new(WEB_MANIFEST_PATH, |config| {
            Vars::app(config).render(WEB_MANIFEST)
        }),
    ]
}

const RUNNER_README: &str = r#"# {{os}} runner

Placeholder for the native {{os}} runner of {{app_title}}.

Generate the real runner from the project root:

```bash
flutter create --platforms={{platform_flag}} .
```

Existing Dart sources are left untouched; only the `{{dir}}/` folder is filled in.
"#;

/// (os label, `flutter create` platform flag, runner directory)
const DESKTOP_RUNNERS: [(&str, &str, &str); 3] = [
    ("Windows", "windows", "windows/runner"),
    ("macOS", "macos", "macos/Runner"),
    ("Linux", "linux", "linux/runner"),
];

pub fn desktop_runner_files() -> Vec<TemplateFile> {
    DESKTOP_RUNNERS
        .iter()
        .map(|&(os, flag, dir)| {
            TemplateFile::new(format!("{}/README.md", dir), move |config| {
                Vars::app(config)
                    .set("os", os)
                    .set("platform_flag", flag)
                    .set("dir", dir.split('/').next().unwrap_or(dir))
                    .render(RUNNER_README)
            })
        })
        .collect()
}

/// Static assets a platform adds on top of the shared Dart sources
pub fn assets(platform: Platform) -> Vec<TemplateFile> {
    match platform {
        Platform::Mobile => Vec::new(),
        Platform::Web => web_files(),
        Platform::Desktop => desktop_runner_files(),
    }
}
