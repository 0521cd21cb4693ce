//! Core utilities every shape shares: logging, validation, errors, routing, storage,
//! and the flag-gated theme, env and API layers

use super::{gates, TemplateFile, Vars};
use crate::bundles::library;
use crate::config::BlueprintConfig;
use crate::naming;

pub const RESPONSIVE_PATH: &str = "lib/core/utils/responsive.dart";
pub const PLATFORM_INFO_PATH: &str = "lib/core/utils/platform_info.dart";
pub const WINDOW_SETUP_PATH: &str = "lib/core/utils/window_setup.dart";
pub const ENV_LOADER_PATH: &str = "lib/core/config/env_loader.dart";

const LOGGER: &str = r#"import 'package:flutter/foundation.dart';
import 'package:logger/logger.dart';

/// App-wide logger. Prefer this over `print`.
final Logger log = Logger(
  printer: PrettyPrinter(
    methodCount: 0,
    errorMethodCount: 5,
    lineLength: 100,
  ),
  level: kReleaseMode ? Level.warning : Level.debug,
);
"#;

const VALIDATORS: &str = r#"/// Form field validators. Each returns an error message or `null` when valid.
class Validators {
  Validators._();

  static final RegExp _emailPattern = RegExp(r'^[\w.+-]+@[\w-]+\.[\w.-]+$');

  static String? required(String? value, {String field = 'This field'}) {
    if (value == null || value.trim().isEmpty) {
      return '$field is required';
    }
    return null;
  }

  static String? email(String? value) {
    final missing = required(value, field: 'Email');
    if (missing != null) return missing;
    if (!_emailPattern.hasMatch(value!.trim())) {
      return 'Enter a valid email address';
    }
    return null;
  }

  static String? minLength(String? value, int min, {String field = 'This field'}) {
    if (value == null || value.length < min) {
      return '$field must be at least $min characters';
    }
    return null;
  }

  static String? password(String? value) {
    final short = minLength(value, 8, field: 'Password');
    if (short != null) return short;
    if (!value!.contains(RegExp(r'[0-9]'))) {
      return 'Password must contain a number';
    }
    return null;
  }
}
"#;

const EXCEPTIONS: &str = r#"/// Exceptions thrown by data sources. Repositories translate them into failures.
class AppException implements Exception {
  const AppException(this.message, {this.statusCode});

  final String message;
  final int? statusCode;

  @override
  String toString() => '$runtimeType($message${statusCode != null ? ', $statusCode' : ''})';
}

class ServerException extends AppException {
  const ServerException(super.message, {super.statusCode});
}

class NetworkException extends AppException {
  const NetworkException([super.message = 'No internet connection']);
}

class CacheException extends AppException {
  const CacheException(super.message);
}

class ValidationException extends AppException {
  const ValidationException(super.message);
}
"#;

const FAILURES: &str = r#"/// Failures surfaced to the presentation layer.
sealed class Failure {
  const Failure(this.message);

  final String message;

  @override
  String toString() => message;
}

class ServerFailure extends Failure {
  const ServerFailure(super.message);
}

class NetworkFailure extends Failure {
  const NetworkFailure(super.message);
}

class CacheFailure extends Failure {
  const CacheFailure(super.message);
}

class ValidationFailure extends Failure {
  const ValidationFailure(super.message);
}
"#;

const LOCAL_STORAGE: &str = r#"import 'package:shared_preferences/shared_preferences.dart';

import '../errors/exceptions.dart';

/// Thin wrapper over [SharedPreferences] so callers never touch the plugin directly.
class LocalStorage {
  LocalStorage._(this._prefs);

  final SharedPreferences _prefs;

  static LocalStorage? _instance;

  static Future<LocalStorage> init() async {
    return _instance ??= LocalStorage._(await SharedPreferences.getInstance());
  }

  static LocalStorage get instance {
    final storage = _instance;
    if (storage == null) {
      throw const CacheException('LocalStorage.init() has not been called');
    }
    return storage;
  }

  String? getString(String key) => _prefs.getString(key);

  Future<void> setString(String key, String value) async {
    final ok = await _prefs.setString(key, value);
    if (!ok) throw CacheException('Failed to write $key');
  }

  bool? getBool(String key) => _prefs.getBool(key);

  Future<void> setBool(String key, bool value) async {
    final ok = await _prefs.setBool(key, value);
    if (!ok) throw CacheException('Failed to write $key');
  }

  Future<void> remove(String key) => _prefs.remove(key);

  Future<void> clear() => _prefs.clear();
}
"#;

const CONSTANTS: &str = r#"/// Compile-time constants shared across features.
class AppConstants {
  AppConstants._();

  static const String appName = '{{app_title}}';
  static const String themeModeKey = 'theme_mode';
  static const double defaultPadding = 16;
  static const double maxContentWidth = 1200;
  static const int pageSize = 20;
  static const Duration apiTimeout = Duration(seconds: 30);
}
"#;

const ROUTER_HEAD: &str = r#"import 'package:flutter/material.dart';

"#;

const ROUTER_BODY: &str = r#"
/// Named routes and the route factory used by the app shell.
class AppRouter {
  AppRouter._();

{{route_constants}}
  static Route<dynamic> onGenerateRoute(RouteSettings settings) {
    switch (settings.name) {
{{route_cases}}      default:
        return MaterialPageRoute<void>(
          builder: (_) => const _UnknownRoutePage(),
          settings: settings,
        );
    }
  }
}

class _UnknownRoutePage extends StatelessWidget {
  const _UnknownRoutePage();

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(title: const Text('Not found')),
      body: const Center(child: Text('This page does not exist.')),
    );
  }
}
"#;

/// Feature modules the router links: `home` first, then the project template's modules
pub fn routed_features(config: &BlueprintConfig) -> Vec<&'static str> {
    let mut features = vec!["home"];
    for &feature in library::required_features(config.template()) {
        if !features.contains(&feature) {
            features.push(feature);
        }
    }
    features
}

fn render_router(config: &BlueprintConfig) -> String {
    let features = routed_features(config);
    let mut imports = String::new();
    let mut constants = String::new();
    let mut cases = String::new();

    for feature in &features {
        let class = naming::pascal_case(feature);
        let constant = naming::camel_case(feature);
        let route = if *feature == "home" {
            "/".to_string()
        } else {
            format!("/{}", feature.replace('_', "-"))
        };
        imports.push_str(&format!(
            "import 'package:{}/features/{}/presentation/pages/{}_page.dart';\n",
            config.app_name(),
            feature,
            feature
        ));
        constants.push_str(&format!(
            "  static const String {} = '{}';\n",
            constant, route
        ));
        cases.push_str(&format!(
            "      case {}:\n        return MaterialPageRoute<void>(\n          builder: (_) => const {}Page(),\n          settings: settings,\n        );\n",
            constant, class
        ));
    }
    constants.push('\n');

    let body = Vars::new()
        .set("route_constants", constants)
        .set("route_cases", cases)
        .render(ROUTER_BODY);
    format!("{}{}{}", ROUTER_HEAD, imports, body)
}

const APP_COLORS: &str = r#"import 'package:flutter/material.dart';

/// Brand palette. Adjust the seed to re-theme the whole app.
class AppColors {
  AppColors._();

  static const Color seed = Color(0xFF3F51B5);
  static const Color success = Color(0xFF2E7D32);
  static const Color warning = Color(0xFFF9A825);
  static const Color error = Color(0xFFC62828);
}
"#;

const APP_THEME: &str = r#"import 'package:flutter/material.dart';

import 'app_colors.dart';

class AppTheme {
  AppTheme._();

  static ThemeData get light => _build(Brightness.light);

  static ThemeData get dark => _build(Brightness.dark);

  static ThemeData _build(Brightness brightness) {
    final scheme = ColorScheme.fromSeed(
      seedColor: AppColors.seed,
      brightness: brightness,
      error: AppColors.error,
    );
    return ThemeData(
      useMaterial3: true,
      colorScheme: scheme,
      appBarTheme: AppBarTheme(
        centerTitle: false,
        backgroundColor: scheme.surface,
        foregroundColor: scheme.onSurface,
      ),
      inputDecorationTheme: const InputDecorationTheme(
        border: OutlineInputBorder(),
      ),
      cardTheme: const CardTheme(
        margin: EdgeInsets.symmetric(vertical: 4),
      ),
    );
  }
}
"#;

const ENV_LOADER: &str = r#"import 'package:flutter_dotenv/flutter_dotenv.dart';

import '../utils/logger.dart';

/// Reads runtime settings from the bundled `.env` asset.
class EnvLoader {
  EnvLoader._();

  static Future<void> load() async {
    try {
      await dotenv.load(fileName: '.env');
    } catch (error) {
      log.w('No .env file found, falling back to defaults ($error)');
      dotenv.testLoad(fileInput: '');
    }
  }

  static String get appEnv => dotenv.maybeGet('APP_ENV') ?? 'development';

  static String get apiBaseUrl => dotenv.maybeGet('API_BASE_URL') ?? '{{api_base_url}}';

  static Duration get apiTimeout => Duration(
        milliseconds: int.tryParse(dotenv.maybeGet('API_TIMEOUT_MS') ?? '') ?? 30000,
      );

  static bool get isProduction => appEnv == 'production';
}
"#;

const API_CLIENT: &str = r#"import 'package:dio/dio.dart';

{{env_import}}import '../constants/app_constants.dart';
import '../errors/exceptions.dart';
import 'api_interceptors.dart';

/// HTTP client for the backend. Throws [AppException] subclasses on failure.
class ApiClient {
  ApiClient({Dio? dio})
      : _dio = dio ??
            Dio(
              BaseOptions(
                baseUrl: {{base_url}},
                connectTimeout: {{timeout}},
                receiveTimeout: {{timeout}},
                headers: {'Accept': 'application/json'},
              ),
            ) {
    _dio.interceptors.addAll([AuthInterceptor(), LoggingInterceptor()]);
  }

  final Dio _dio;

  Future<T?> get<T>(String path, {Map<String, dynamic>? query}) {
    return _send(() => _dio.get<T>(path, queryParameters: query));
  }

  Future<T?> post<T>(String path, {Object? data}) {
    return _send(() => _dio.post<T>(path, data: data));
  }

  Future<T?> put<T>(String path, {Object? data}) {
    return _send(() => _dio.put<T>(path, data: data));
  }

  Future<T?> delete<T>(String path) {
    return _send(() => _dio.delete<T>(path));
  }

  Future<T?> _send<T>(Future<Response<T>> Function() request) async {
    try {
      final response = await request();
      return response.data;
    } on DioException catch (error) {
      throw _mapError(error);
    }
  }

  AppException _mapError(DioException error) {
    switch (error.type) {
      case DioExceptionType.connectionTimeout:
      case DioExceptionType.receiveTimeout:
      case DioExceptionType.sendTimeout:
      case DioExceptionType.connectionError:
        return const NetworkException();
      default:
        return ServerException(
          error.message ?? 'Unexpected server error',
          statusCode: error.response?.statusCode,
        );
    }
  }
}
"#;

const API_INTERCEPTORS: &str = r#"import 'package:dio/dio.dart';

import '../storage/local_storage.dart';
import '../utils/logger.dart';

/// Adds the stored bearer token, when there is one.
class AuthInterceptor extends Interceptor {
  static const String tokenKey = 'auth_token';

  @override
  void onRequest(RequestOptions options, RequestInterceptorHandler handler) {
    try {
      final token = LocalStorage.instance.getString(tokenKey);
      if (token != null) {
        options.headers['Authorization'] = 'Bearer $token';
      }
    } catch (_) {
      // Storage not initialised yet; send the request unauthenticated.
    }
    handler.next(options);
  }
}

class LoggingInterceptor extends Interceptor {
  @override
  void onRequest(RequestOptions options, RequestInterceptorHandler handler) {
    log.d('--> ${options.method} ${options.uri}');
    handler.next(options);
  }

  @override
  void onResponse(Response<dynamic> response, ResponseInterceptorHandler handler) {
    log.d('<-- ${response.statusCode} ${response.requestOptions.uri}');
    handler.next(response);
  }

  @override
  void onError(DioException err, ErrorInterceptorHandler handler) {
    log.e('<-- ${err.response?.statusCode ?? 'ERR'} ${err.requestOptions.uri}', error: err);
    handler.next(err);
  }
}
"#;

fn render_api_client(config: &BlueprintConfig) -> String {
    let (env_import, base_url, timeout) = if config.features().env {
        (
            "import '../config/env_loader.dart';\n",
            "EnvLoader.apiBaseUrl".to_string(),
            "EnvLoader.apiTimeout",
        )
    } else {
        (
            "",
            format!("'{}'", config.api_base_url()),
            "AppConstants.apiTimeout",
        )
    };
    Vars::new()
        .set("env_import", env_import)
        .set("base_url", base_url)
        .set("timeout", timeout)
        .render(API_CLIENT)
}

const RESPONSIVE: &str = r#"import 'package:flutter/widgets.dart';

/// Width breakpoints shared by every layout.
class Breakpoints {
  Breakpoints._();

  static const double tablet = 600;
  static const double desktop = 1024;
}

/// Picks a layout for the current width; falls back to the next smaller one.
class Responsive extends StatelessWidget {
  const Responsive({
    super.key,
    required this.mobile,
    this.tablet,
    this.desktop,
  });

  final Widget mobile;
  final Widget? tablet;
  final Widget? desktop;

  @override
  Widget build(BuildContext context) {
    return LayoutBuilder(
      builder: (context, constraints) {
        final width = constraints.maxWidth;
        if (width >= Breakpoints.desktop) {
          return desktop ?? tablet ?? mobile;
        }
        if (width >= Breakpoints.tablet) {
          return tablet ?? mobile;
        }
        return mobile;
      },
    );
  }
}

extension ResponsiveContext on BuildContext {
  double get screenWidth => MediaQuery.sizeOf(this).width;

  bool get isMobileWidth => screenWidth < Breakpoints.tablet;

  bool get isTabletWidth =>
      screenWidth >= Breakpoints.tablet && screenWidth < Breakpoints.desktop;

  bool get isDesktopWidth => screenWidth >= Breakpoints.desktop;
}
"#;

const PLATFORM_INFO: &str = r#"import 'package:flutter/foundation.dart';

/// Where the app is running, resolved without touching `dart:io` so it is web-safe.
class PlatformInfo {
  PlatformInfo._();

  static bool get isWeb => kIsWeb;

  static bool get isDesktop =>
      !kIsWeb &&
      (defaultTargetPlatform == TargetPlatform.windows ||
          defaultTargetPlatform == TargetPlatform.macOS ||
          defaultTargetPlatform == TargetPlatform.linux);

  static bool get isMobile =>
      !kIsWeb &&
      (defaultTargetPlatform == TargetPlatform.android ||
          defaultTargetPlatform == TargetPlatform.iOS);

  static String get name {
    if (kIsWeb) return 'web';
    return defaultTargetPlatform.name;
  }
}
"#;

const WINDOW_SETUP: &str = r#"import 'package:flutter/widgets.dart';
import 'package:window_manager/window_manager.dart';

/// Initial window geometry for desktop targets.
Future<void> setupWindow() async {
  await windowManager.ensureInitialized();
  const options = WindowOptions(
    title: '{{app_title}}',
    size: Size(1280, 800),
    minimumSize: Size(800, 600),
    center: true,
    titleBarStyle: TitleBarStyle.normal,
  );
  await windowManager.waitUntilReadyToShow(options, () async {
    await windowManager.show();
    await windowManager.focus();
  });
}
"#;

pub fn responsive() -> TemplateFile {
    TemplateFile::fixed(RESPONSIVE_PATH, RESPONSIVE)
}

pub fn platform_info() -> TemplateFile {
    TemplateFile::fixed(PLATFORM_INFO_PATH, PLATFORM_INFO)
}

pub fn window_setup() -> TemplateFile {
    TemplateFile::new(WINDOW_SETUP_PATH, |config| {
        Vars::app(config).render(WINDOW_SETUP)
    })
}

/// Core files included in every shape bundle
pub fn core_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::fixed("lib/core/utils/logger.dart", LOGGER),
        TemplateFile::fixed("lib/core/utils/validators.dart", VALIDATORS),
        TemplateFile::fixed("lib/core/errors/exceptions.dart", EXCEPTIONS),
        TemplateFile::fixed("lib/core/errors/failures.dart", FAILURES),
        TemplateFile::fixed("lib/core/storage/local_storage.dart", LOCAL_STORAGE),
        TemplateFile::new("lib/core/constants/app_constants.dart", |config| {
            Vars::app(config).render(CONSTANTS)
        }),
        TemplateFile::new("lib/core/routing/app_router.dart", render_router),
        TemplateFile::fixed("lib/core/theme/app_colors.dart", APP_COLORS).when(gates::theme),
        TemplateFile::fixed("lib/core/theme/app_theme.dart", APP_THEME).when(gates::theme),
        TemplateFile::new(ENV_LOADER_PATH, |config| {
            Vars::new()
                .set("api_base_url", config.api_base_url())
                .render(ENV_LOADER)
        })
        .when(gates::env),
        TemplateFile::new("lib/core/api/api_client.dart", render_api_client).when(gates::api),
        TemplateFile::fixed("lib/core/api/api_interceptors.dart", API_INTERCEPTORS)
            .when(gates::api),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureFlags, ProjectTemplate};

    #[test]
    fn test_router_routes_template_features() {
        let config = BlueprintConfig::builder("shop")
            .template(ProjectTemplate::Ecommerce)
            .build()
            .unwrap();
        let router = render_router(&config);
        assert!(router.contains("import 'package:shop/features/home/presentation/pages/home_page.dart';"));
        assert!(router.contains("static const String home = '/';"));
        assert!(router.contains("static const String products = '/products';"));
        assert!(router.contains("builder: (_) => const CartPage(),"));
        assert!(!router.contains("{{"));
    }

    #[test]
    fn test_api_client_base_url_source() {
        let with_env = BlueprintConfig::builder("shop")
            .features(FeatureFlags::all())
            .build()
            .unwrap();
        let client = render_api_client(&with_env);
        assert!(client.contains("baseUrl: EnvLoader.apiBaseUrl,"));
        assert!(client.contains("import '../config/env_loader.dart';"));

        let without_env = BlueprintConfig::builder("shop")
            .features(FeatureFlags::from_names(&["api"]).unwrap())
            .api_base_url("https://shop.example.com")
            .build()
            .unwrap();
        let client = render_api_client(&without_env);
        assert!(client.contains("baseUrl: 'https://shop.example.com',"));
        assert!(!client.contains("EnvLoader"));
    }
}
