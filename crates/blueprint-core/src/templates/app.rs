//! Entry points, the app shell and the per-style settings state

use super::{TemplateFile, Vars};
use crate::config::{BlueprintConfig, Platform, StateManagement};

pub const MAIN_PATH: &str = "lib/main.dart";
pub const APP_PATH: &str = "lib/app/app.dart";

/// `lib/main_<platform>.dart`, used by multi-platform projects
pub fn platform_main_path(platform: Platform) -> String {
    format!("lib/main_{}.dart", platform.name())
}

const MAIN: &str = r#"import 'package:flutter/material.dart';
{{imports}}
import 'app/app.dart';
import 'core/storage/local_storage.dart';
import 'core/utils/logger.dart';

Future<void> main() async {
  WidgetsFlutterBinding.ensureInitialized();
  FlutterError.onError = (details) {
    log.e('Uncaught Flutter error', error: details.exception, stackTrace: details.stack);
  };
{{bootstrap}}  final storage = await LocalStorage.init();

  runApp(
{{root}}  );
}
"#;

fn state_import(style: StateManagement) -> &'static str {
    match style {
        StateManagement::Provider => {
            "import 'package:provider/provider.dart';\n\nimport 'app/settings/settings_provider.dart';\n"
        }
        StateManagement::Riverpod => {
            "import 'package:flutter_riverpod/flutter_riverpod.dart';\n\nimport 'app/settings/settings_notifier.dart';\n"
        }
        StateManagement::Bloc => {
            "import 'package:flutter_bloc/flutter_bloc.dart';\n\nimport 'app/settings/settings_cubit.dart';\n"
        }
    }
}

/// Root widget providing the settings state above the app shell
pub(crate) fn root_widget(style: StateManagement, class_prefix: &str) -> String {
    match style {
        StateManagement::Provider => format!(
            "    MultiProvider(\n      providers: [\n        ChangeNotifierProvider(create: (_) => SettingsProvider(storage)),\n      ],\n      child: const {}App(),\n    ),\n",
            class_prefix
        ),
        StateManagement::Riverpod => format!(
            "    ProviderScope(\n      overrides: [localStorageProvider.overrideWithValue(storage)],\n      child: const {}App(),\n    ),\n",
            class_prefix
        ),
        StateManagement::Bloc => format!(
            "    BlocProvider(\n      create: (_) => SettingsCubit(storage),\n      child: const {}App(),\n    ),\n",
            class_prefix
        ),
    }
}

/// Entry point for one platform: bootstrap, settings state, then the app shell
pub fn render_main(config: &BlueprintConfig, platform: Platform) -> String {
    let mut imports = String::new();
    let mut bootstrap = String::new();

    match platform {
        Platform::Mobile => {}
        Platform::Web => {
            imports.push_str("import 'package:flutter_web_plugins/url_strategy.dart';\n");
            bootstrap.push_str("  usePathUrlStrategy();\n");
        }
        Platform::Desktop => {
            imports.push_str("import 'core/utils/window_setup.dart';\n");
            bootstrap.push_str("  await setupWindow();\n");
        }
    }
    if config.features().env {
        imports.push_str("import 'core/config/env_loader.dart';\n");
        bootstrap.push_str("  await EnvLoader.load();\n");
    }
    imports.push_str(state_import(config.state_management()));

    Vars::new()
        .set("imports", imports)
        .set("bootstrap", bootstrap)
        .set(
            "root",
            root_widget(config.state_management(), &config.class_prefix()),
        )
        .render(MAIN)
}

/// `lib/main.dart` for a single-platform project
pub fn main_entry(platform: Platform) -> TemplateFile {
    TemplateFile::new(MAIN_PATH, move |config| render_main(config, platform))
}

/// `lib/main_<platform>.dart` for a multi-platform project
pub fn platform_entry(platform: Platform) -> TemplateFile {
    TemplateFile::new(platform_main_path(platform), move |config| {
        render_main(config, platform)
    })
}

/// Dispatcher `lib/main.dart` delegating to the entry point of the running platform
pub fn render_dispatcher(config: &BlueprintConfig) -> String {
    let mut out = String::from(
        "import 'core/utils/platform_info.dart';\n",
    );
    for platform in config.platforms() {
        out.push_str(&format!(
            "import 'main_{name}.dart' as {name};\n",
            name = platform.name()
        ));
    }

    out.push_str("\n/// Picks the entry point for the platform the app is running on.\nFuture<void> main() async {\n");
    if config.has_platform(Platform::Web) {
        out.push_str("  if (PlatformInfo.isWeb) return web.main();\n");
    }
    if config.has_platform(Platform::Desktop) {
        out.push_str("  if (PlatformInfo.isDesktop) return desktop.main();\n");
    }
    let fallback = [Platform::Mobile, Platform::Desktop, Platform::Web]
        .into_iter()
        .find(|p| config.has_platform(*p))
        .unwrap_or(Platform::Mobile);
    out.push_str(&format!("  return {}.main();\n}}\n", fallback.name()));
    out
}

pub fn dispatcher() -> TemplateFile {
    TemplateFile::new(MAIN_PATH, render_dispatcher)
}

const APP: &str = r#"import 'package:flutter/material.dart';
{{imports}}
import '../core/constants/app_constants.dart';
import '../core/routing/app_router.dart';
{{settings_import}}
class {{class_prefix}}App extends {{widget_base}} {
  const {{class_prefix}}App({super.key});

  @override
  Widget build({{build_params}}) {
{{body}}  }
}
"#;

fn material_app(config: &BlueprintConfig, theme_mode: &str, indent: &str) -> String {
    let features = config.features();
    let mut lines = vec![
        "title: AppConstants.appName,".to_string(),
        "debugShowCheckedModeBanner: false,".to_string(),
    ];
    if features.theme {
        lines.push("theme: AppTheme.light,".to_string());
        lines.push("darkTheme: AppTheme.dark,".to_string());
    } else {
        lines.push("theme: ThemeData(colorSchemeSeed: Colors.indigo, useMaterial3: true),".to_string());
        lines.push(
            "darkTheme: ThemeData(\n  colorSchemeSeed: Colors.indigo,\n  brightness: Brightness.dark,\n  useMaterial3: true,\n),"
                .to_string(),
        );
    }
    lines.push(format!("themeMode: {},", theme_mode));
    if features.localization {
        lines.push("localizationsDelegates: AppLocalizations.localizationsDelegates,".to_string());
        lines.push("supportedLocales: AppLocalizations.supportedLocales,".to_string());
    }
    lines.push("initialRoute: AppRouter.home,".to_string());
    lines.push("onGenerateRoute: AppRouter.onGenerateRoute,".to_string());

    let inner = format!("{}  ", indent);
    let mut out = format!("{}return MaterialApp(\n", indent);
    for line in lines {
        for part in line.lines() {
            out.push_str(&inner);
            out.push_str(part);
            out.push('\n');
        }
    }
    out.push_str(&format!("{});\n", indent));
    out
}

/// `lib/app/app.dart`: MaterialApp wired to the settings state
pub fn render_app(config: &BlueprintConfig) -> String {
    let features = config.features();
    let mut imports = String::new();
    if features.localization {
        imports.push_str("import 'package:flutter_gen/gen_l10n/app_localizations.dart';\n");
    }

    let (package_import, settings_import, widget_base, build_params, body) =
        match config.state_management() {
            StateManagement::Provider => (
                "import 'package:provider/provider.dart';\n",
                "import 'settings/settings_provider.dart';\n",
                "StatelessWidget",
                "BuildContext context",
                format!(
                    "    final themeMode = context.watch<SettingsProvider>().themeMode;\n{}",
                    material_app(config, "themeMode", "    ")
                ),
            ),
            StateManagement::Riverpod => (
                "import 'package:flutter_riverpod/flutter_riverpod.dart';\n",
                "import 'settings/settings_notifier.dart';\n",
                "ConsumerWidget",
                "BuildContext context, WidgetRef ref",
                format!(
                    "    final themeMode = ref.watch(themeModeProvider);\n{}",
                    material_app(config, "themeMode", "    ")
                ),
            ),
            StateManagement::Bloc => (
                "import 'package:flutter_bloc/flutter_bloc.dart';\n",
                "import 'settings/settings_cubit.dart';\n",
                "StatelessWidget",
                "BuildContext context",
                format!(
                    "    return BlocBuilder<SettingsCubit, ThemeMode>(\n      builder: (context, themeMode) {{\n{}      }},\n    );\n",
                    material_app(config, "themeMode", "        ")
                ),
            ),
        };
    imports.push_str(package_import);

    let mut core_imports = String::new();
    if features.theme {
        core_imports.push_str("import '../core/theme/app_theme.dart';\n");
    }

    Vars::app(config)
        .set("imports", imports)
        .set("settings_import", format!("{}{}", core_imports, settings_import))
        .set("widget_base", widget_base)
        .set("build_params", build_params)
        .set("body", body)
        .render(APP)
}

const THEME_MODE_STORAGE: &str = r#"import 'package:flutter/material.dart';
import 'package:{{app_name}}/core/constants/app_constants.dart';
import 'package:{{app_name}}/core/storage/local_storage.dart';

ThemeMode readThemeMode(LocalStorage storage) {
  final stored = storage.getString(AppConstants.themeModeKey);
  return ThemeMode.values.firstWhere(
    (mode) => mode.name == stored,
    orElse: () => ThemeMode.system,
  );
}

Future<void> writeThemeMode(LocalStorage storage, ThemeMode mode) {
  return storage.setString(AppConstants.themeModeKey, mode.name);
}

ThemeMode nextThemeMode(ThemeMode mode) {
  return mode == ThemeMode.dark ? ThemeMode.light : ThemeMode.dark;
}
"#;

const SETTINGS_PROVIDER: &str = r#"import 'package:flutter/material.dart';
import 'package:{{app_name}}/core/storage/local_storage.dart';

import 'theme_mode_storage.dart';

class SettingsProvider extends ChangeNotifier {
  SettingsProvider(this._storage) : _themeMode = readThemeMode(_storage);

  final LocalStorage _storage;
  ThemeMode _themeMode;

  ThemeMode get themeMode => _themeMode;

  Future<void> toggleThemeMode() async {
    _themeMode = nextThemeMode(_themeMode);
    notifyListeners();
    await writeThemeMode(_storage, _themeMode);
  }
}
"#;

const SETTINGS_NOTIFIER: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';
import 'package:{{app_name}}/core/storage/local_storage.dart';

import 'theme_mode_storage.dart';

/// Overridden in `main` with the initialised instance.
final localStorageProvider = Provider<LocalStorage>((ref) => LocalStorage.instance);

class ThemeModeNotifier extends Notifier<ThemeMode> {
  @override
  ThemeMode build() => readThemeMode(ref.read(localStorageProvider));

  Future<void> toggle() async {
    state = nextThemeMode(state);
    await writeThemeMode(ref.read(localStorageProvider), state);
  }
}

final themeModeProvider = NotifierProvider<ThemeModeNotifier, ThemeMode>(
  ThemeModeNotifier.new,
);
"#;

const SETTINGS_CUBIT: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';
import 'package:{{app_name}}/core/storage/local_storage.dart';

import 'theme_mode_storage.dart';

class SettingsCubit extends Cubit<ThemeMode> {
  SettingsCubit(this._storage) : super(readThemeMode(_storage));

  final LocalStorage _storage;

  Future<void> toggleThemeMode() async {
    emit(nextThemeMode(state));
    await writeThemeMode(_storage, state);
  }
}
"#;

const BUTTON_PROVIDER: &str = r#"import 'package:flutter/material.dart';
import 'package:provider/provider.dart';

import 'settings_provider.dart';

class ThemeModeButton extends StatelessWidget {
  const ThemeModeButton({super.key});

  @override
  Widget build(BuildContext context) {
    final settings = context.watch<SettingsProvider>();
    return IconButton(
      tooltip: 'Toggle theme',
      icon: Icon(settings.themeMode == ThemeMode.dark ? Icons.light_mode : Icons.dark_mode),
      onPressed: settings.toggleThemeMode,
    );
  }
}
"#;

const BUTTON_RIVERPOD: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';

import 'settings_notifier.dart';

class ThemeModeButton extends ConsumerWidget {
  const ThemeModeButton({super.key});

  @override
  Widget build(BuildContext context, WidgetRef ref) {
    final themeMode = ref.watch(themeModeProvider);
    return IconButton(
      tooltip: 'Toggle theme',
      icon: Icon(themeMode == ThemeMode.dark ? Icons.light_mode : Icons.dark_mode),
      onPressed: () => ref.read(themeModeProvider.notifier).toggle(),
    );
  }
}
"#;

const BUTTON_BLOC: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';

import 'settings_cubit.dart';

class ThemeModeButton extends StatelessWidget {
  const ThemeModeButton({super.key});

  @override
  Widget build(BuildContext context) {
    final themeMode = context.watch<SettingsCubit>().state;
    return IconButton(
      tooltip: 'Toggle theme',
      icon: Icon(themeMode == ThemeMode.dark ? Icons.light_mode : Icons.dark_mode),
      onPressed: () => context.read<SettingsCubit>().toggleThemeMode(),
    );
  }
}
"#;

fn app_file(path: &'static str, body: &'static str) -> TemplateFile {
    TemplateFile::new(path, move |config| Vars::app(config).render(body))
}

/// App shell plus theme-mode settings state for one style
pub fn app_files(style: StateManagement) -> Vec<TemplateFile> {
    let mut files = vec![
        TemplateFile::new(APP_PATH, render_app),
        app_file("lib/app/settings/theme_mode_storage.dart", THEME_MODE_STORAGE),
    ];
    let (state_path, state_body, button_body) = match style {
        StateManagement::Provider => (
            "lib/app/settings/settings_provider.dart",
            SETTINGS_PROVIDER,
            BUTTON_PROVIDER,
        ),
        StateManagement::Riverpod => (
            "lib/app/settings/settings_notifier.dart",
            SETTINGS_NOTIFIER,
            BUTTON_RIVERPOD,
        ),
        StateManagement::Bloc => (
            "lib/app/settings/settings_cubit.dart",
            SETTINGS_CUBIT,
            BUTTON_BLOC,
        ),
    };
    files.push(app_file(state_path, state_body));
    files.push(TemplateFile::fixed(
        "lib/app/settings/theme_mode_button.dart",
        button_body,
    ));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;

    fn config(platforms: &[Platform], style: StateManagement, features: FeatureFlags) -> BlueprintConfig {
        BlueprintConfig::builder("my_shop")
            .platforms(platforms.iter().copied())
            .state_management(style)
            .features(features)
            .build()
            .unwrap()
    }

    #[test]
    fn test_main_bootstrap_per_platform() {
        let c = config(&[Platform::Desktop], StateManagement::Bloc, FeatureFlags::all());
        let main = render_main(&c, Platform::Desktop);
        assert!(main.contains("await setupWindow();"));
        assert!(main.contains("await EnvLoader.load();"));
        assert!(main.contains("create: (_) => SettingsCubit(storage),"));
        assert!(main.contains("child: const MyShopApp(),"));

        let web = render_main(&c, Platform::Web);
        assert!(web.contains("usePathUrlStrategy();"));
        assert!(!web.contains("setupWindow"));
    }

    #[test]
    fn test_main_without_env() {
        let c = config(&[Platform::Mobile], StateManagement::Riverpod, FeatureFlags::none());
        let main = render_main(&c, Platform::Mobile);
        assert!(!main.contains("EnvLoader"));
        assert!(main.contains("ProviderScope("));
        assert!(!main.contains("{{"));
    }

    #[test]
    fn test_dispatcher_only_imports_requested_platforms() {
        let c = config(
            &[Platform::Mobile, Platform::Web],
            StateManagement::Provider,
            FeatureFlags::default(),
        );
        let dispatcher = render_dispatcher(&c);
        assert!(dispatcher.contains("import 'main_mobile.dart' as mobile;"));
        assert!(dispatcher.contains("import 'main_web.dart' as web;"));
        assert!(!dispatcher.contains("desktop"));
        assert!(dispatcher.contains("return mobile.main();"));
    }

    #[test]
    fn test_dispatcher_fallback_without_mobile() {
        let c = config(
            &[Platform::Web, Platform::Desktop],
            StateManagement::Provider,
            FeatureFlags::default(),
        );
        let dispatcher = render_dispatcher(&c);
        assert!(dispatcher.contains("if (PlatformInfo.isWeb) return web.main();"));
        assert!(dispatcher.ends_with("  return desktop.main();\n}\n"));
    }

    #[test]
    fn test_app_shell_follows_flags() {
        let themed = config(&[Platform::Mobile], StateManagement::Bloc, FeatureFlags::all());
        let app = render_app(&themed);
        assert!(app.contains("class MyShopApp extends StatelessWidget"));
        assert!(app.contains("BlocBuilder<SettingsCubit, ThemeMode>"));
        assert!(app.contains("theme: AppTheme.light,"));
        assert!(app.contains("localizationsDelegates: AppLocalizations.localizationsDelegates,"));

        let plain = config(&[Platform::Mobile], StateManagement::Riverpod, FeatureFlags::none());
        let app = render_app(&plain);
        assert!(app.contains("extends ConsumerWidget"));
        assert!(!app.contains("AppTheme"));
        assert!(!app.contains("AppLocalizations"));
    }

    #[test]
    fn test_settings_files_per_style() {
        for style in StateManagement::ALL {
            let paths: Vec<String> = app_files(style)
                .iter()
                .map(|f| f.path().to_string())
                .collect();
            assert_eq!(paths.len(), 4);
            assert!(paths.contains(&APP_PATH.to_string()));
        }
    }
}
