//! Dart test scaffolding shared by every shape (gated on the tests flag)

use super::app::root_widget;
use super::{gates, TemplateFile, Vars};
use crate::config::{BlueprintConfig, StateManagement};

const WIDGET_TEST: &str = r#"import 'package:flutter_test/flutter_test.dart';
import 'package:shared_preferences/shared_preferences.dart';
{{state_imports}}import 'package:{{app_name}}/app/app.dart';
import 'package:{{app_name}}/core/storage/local_storage.dart';

void main() {
  setUp(() => SharedPreferences.setMockInitialValues({}));

  testWidgets('app starts on the home page', (tester) async {
    final storage = await LocalStorage.init();

    await tester.pumpWidget(
{{root}}    );
    await tester.pumpAndSettle();

    expect(find.text('Home'), findsOneWidget);
  });
}
"#;

fn render_widget_test(config: &BlueprintConfig) -> String {
    let state_imports = match config.state_management() {
        StateManagement::Provider => {
            "import 'package:provider/provider.dart';\nimport 'package:{{app_name}}/app/settings/settings_provider.dart';\n"
        }
        StateManagement::Riverpod => {
            "import 'package:flutter_riverpod/flutter_riverpod.dart';\nimport 'package:{{app_name}}/app/settings/settings_notifier.dart';\n"
        }
        StateManagement::Bloc => {
            "import 'package:flutter_bloc/flutter_bloc.dart';\nimport 'package:{{app_name}}/app/settings/settings_cubit.dart';\n"
        }
    };
    // state imports carry their own placeholder, so substitute them first
    let body = Vars::new()
        .set("state_imports", state_imports)
        .set(
            "root",
            root_widget(config.state_management(), &config.class_prefix()),
        )
        .render(WIDGET_TEST);
    Vars::app(config).render(&body)
}

const VALIDATORS_TEST: &str = r#"import 'package:flutter_test/flutter_test.dart';
import 'package:{{app_name}}/core/utils/validators.dart';

void main() {
  group('Validators.required', () {
    test('rejects null and blank input', () {
      expect(Validators.required(null), isNotNull);
      expect(Validators.required('   '), isNotNull);
    });

    test('accepts non-empty input', () {
      expect(Validators.required('value'), isNull);
    });
  });

  group('Validators.email', () {
    test('accepts a plain address', () {
      expect(Validators.email('dev@example.com'), isNull);
    });

    test('rejects a missing domain', () {
      expect(Validators.email('dev@'), isNotNull);
    });
  });

  group('Validators.password', () {
    test('needs eight characters and a digit', () {
      expect(Validators.password('short1'), isNotNull);
      expect(Validators.password('longenough'), isNotNull);
      expect(Validators.password('longenough1'), isNull);
    });
  });
}
"#;

/// Project-level tests: app smoke test and validator unit tests
pub fn test_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("test/widget_test.dart", render_widget_test).when(gates::tests),
        TemplateFile::new("test/core/validators_test.dart", |config| {
            Vars::app(config).render(VALIDATORS_TEST)
        })
        .when(gates::tests),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlags;
    use crate::templates::emit_files;

    #[test]
    fn test_widget_test_wraps_app_in_settings_state() {
        let config = BlueprintConfig::builder("my_shop")
            .state_management(StateManagement::Provider)
            .build()
            .unwrap();
        let rendered = render_widget_test(&config);
        assert!(rendered.contains("import 'package:my_shop/app/settings/settings_provider.dart';"));
        assert!(rendered.contains("ChangeNotifierProvider(create: (_) => SettingsProvider(storage)),"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_files_gated_on_tests_flag() {
        let off = BlueprintConfig::builder("my_shop")
            .features(FeatureFlags::none())
            .build()
            .unwrap();
        assert!(emit_files(&test_files(), &off).files.is_empty());

        let on = BlueprintConfig::builder("my_shop").build().unwrap();
        assert_eq!(emit_files(&test_files(), &on).files.len(), 2);
    }
}
