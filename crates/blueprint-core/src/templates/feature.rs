//! Feature module scaffolding
//!
//! A feature module is a small list-of-items slice (create, read, toggle)
//! with a data layer shared by every style and presentation plumbing
//! written in the chosen state-management idiom.

use super::{gates, TemplateFile, Vars};
use crate::config::{BlueprintConfig, StateManagement};
use crate::error::ConfigError;
use crate::naming;

/// Reject names that would not make a valid Dart library or class name
pub fn validate_feature_name(name: &str) -> Result<(), ConfigError> {
    naming::check_snake_identifier(name).map_err(|reason| ConfigError::InvalidFeatureName {
        name: name.to_string(),
        reason,
    })
}

fn feature_vars(config: &BlueprintConfig, feature: &str) -> Vars {
    Vars::app(config)
        .set("feature", feature)
        .set("feature_class", naming::pascal_case(feature))
        .set("feature_camel", naming::camel_case(feature))
        .set("feature_title", naming::title_case(feature))
}

fn feature_file(path: &str, feature: &str, body: &'static str) -> TemplateFile {
    let name = feature.to_string();
    TemplateFile::new(path.replace("{{feature}}", feature), move |config| {
        feature_vars(config, &name).render(body)
    })
}

const MODEL: &str = r#"/// A single {{feature_title}} entry.
class {{feature_class}}Item {
  const {{feature_class}}Item({
    required this.id,
    required this.title,
    this.done = false,
  });

  factory {{feature_class}}Item.fromJson(Map<String, dynamic> json) {
    return {{feature_class}}Item(
      id: json['id'] as String,
      title: json['title'] as String,
      done: json['done'] as bool? ?? false,
    );
  }

  final String id;
  final String title;
  final bool done;

  {{feature_class}}Item copyWith({String? title, bool? done}) {
    return {{feature_class}}Item(
      id: id,
      title: title ?? this.title,
      done: done ?? this.done,
    );
  }

  Map<String, dynamic> toJson() => {'id': id, 'title': title, 'done': done};

  @override
  bool operator ==(Object other) =>
      other is {{feature_class}}Item &&
      other.id == id &&
      other.title == title &&
      other.done == done;

  @override
  int get hashCode => Object.hash(id, title, done);
}
"#;

const REPOSITORY: &str = r#"import 'package:{{app_name}}/core/errors/exceptions.dart';

import '../models/{{feature}}_item.dart';

/// In-memory store for {{feature_title}} items. Swap for an API-backed source later.
class {{feature_class}}Repository {
  final List<{{feature_class}}Item> _items = [];
  int _nextId = 1;

  Future<List<{{feature_class}}Item>> fetchAll() async {
    return List.unmodifiable(_items);
  }

  Future<{{feature_class}}Item> create(String title) async {
    final trimmed = title.trim();
    if (trimmed.isEmpty) {
      throw const ValidationException('Title must not be empty');
    }
    final item = {{feature_class}}Item(id: '${_nextId++}', title: trimmed);
    _items.add(item);
    return item;
  }

  Future<{{feature_class}}Item> update({{feature_class}}Item item) async {
    final index = _items.indexWhere((existing) => existing.id == item.id);
    if (index == -1) {
      throw CacheException('No {{feature_title}} item with id ${item.id}');
    }
    _items[index] = item;
    return item;
  }

  Future<void> remove(String id) async {
    _items.removeWhere((item) => item.id == id);
  }
}
"#;

const LIST_WIDGET: &str = r#"import 'package:flutter/material.dart';

import '../../data/models/{{feature}}_item.dart';

class {{feature_class}}List extends StatelessWidget {
  const {{feature_class}}List({
    super.key,
    required this.items,
    required this.onToggle,
  });

  final List<{{feature_class}}Item> items;
  final ValueChanged<{{feature_class}}Item> onToggle;

  @override
  Widget build(BuildContext context) {
    if (items.isEmpty) {
      return const Center(child: Text('Nothing here yet'));
    }
    return ListView.builder(
      itemCount: items.length,
      itemBuilder: (context, index) {
        final item = items[index];
        return CheckboxListTile(
          key: ValueKey(item.id),
          value: item.done,
          title: Text(item.title),
          onChanged: (_) => onToggle(item),
        );
      },
    );
  }
}

Future<String?> showAdd{{feature_class}}Dialog(BuildContext context) {
  final controller = TextEditingController();
  return showDialog<String>(
    context: context,
    builder: (context) => AlertDialog(
      title: const Text('Add {{feature_title}} item'),
      content: TextField(
        controller: controller,
        autofocus: true,
        decoration: const InputDecoration(labelText: 'Title'),
        onSubmitted: (value) => Navigator.of(context).pop(value),
      ),
      actions: [
        TextButton(
          onPressed: () => Navigator.of(context).pop(),
          child: const Text('Cancel'),
        ),
        FilledButton(
          onPressed: () => Navigator.of(context).pop(controller.text),
          child: const Text('Add'),
        ),
      ],
    ),
  );
}
"#;

const REPOSITORY_TEST: &str = r#"import 'package:flutter_test/flutter_test.dart';
import 'package:{{app_name}}/core/errors/exceptions.dart';
import 'package:{{app_name}}/features/{{feature}}/data/repositories/{{feature}}_repository.dart';

void main() {
  late {{feature_class}}Repository repository;

  setUp(() => repository = {{feature_class}}Repository());

  test('create assigns ids and trims titles', () async {
    final first = await repository.create('  first ');
    final second = await repository.create('second');

    expect(first.title, 'first');
    expect(first.id, isNot(second.id));
    expect(await repository.fetchAll(), hasLength(2));
  });

  test('create rejects blank titles', () {
    expect(repository.create('   '), throwsA(isA<ValidationException>()));
  });

  test('update replaces the stored item', () async {
    final item = await repository.create('task');
    await repository.update(item.copyWith(done: true));

    final items = await repository.fetchAll();
    expect(items.single.done, isTrue);
  });
}
"#;

// Provider (ChangeNotifier) plumbing

const PROVIDER_STATE: &str = r#"import 'package:flutter/foundation.dart';
import 'package:{{app_name}}/core/errors/exceptions.dart';
import 'package:{{app_name}}/core/utils/logger.dart';

import '../../data/models/{{feature}}_item.dart';
import '../../data/repositories/{{feature}}_repository.dart';

class {{feature_class}}Provider extends ChangeNotifier {
  {{feature_class}}Provider(this._repository);

  final {{feature_class}}Repository _repository;

  List<{{feature_class}}Item> _items = const [];
  bool _loading = false;
  String? _error;

  List<{{feature_class}}Item> get items => _items;
  bool get isLoading => _loading;
  String? get error => _error;

  Future<void> load() async {
    _loading = true;
    _error = null;
    notifyListeners();
    try {
      _items = await _repository.fetchAll();
    } on AppException catch (e) {
      _error = e.message;
      log.e('Loading {{feature}} failed', error: e);
    } finally {
      _loading = false;
      notifyListeners();
    }
  }

  Future<void> add(String title) async {
    await _mutate(() => _repository.create(title));
  }

  Future<void> toggle({{feature_class}}Item item) async {
    await _mutate(() => _repository.update(item.copyWith(done: !item.done)));
  }

  Future<void> _mutate(Future<Object?> Function() action) async {
    try {
      await action();
      _items = await _repository.fetchAll();
      _error = null;
    } on AppException catch (e) {
      _error = e.message;
    }
    notifyListeners();
  }
}
"#;

const PROVIDER_PAGE: &str = r#"import 'package:flutter/material.dart';
import 'package:provider/provider.dart';
import 'package:{{app_name}}/app/settings/theme_mode_button.dart';

import '../../data/repositories/{{feature}}_repository.dart';
import '../providers/{{feature}}_provider.dart';
import '../widgets/{{feature}}_list.dart';

class {{feature_class}}Page extends StatelessWidget {
  const {{feature_class}}Page({super.key});

  @override
  Widget build(BuildContext context) {
    return ChangeNotifierProvider(
      create: (_) => {{feature_class}}Provider({{feature_class}}Repository())..load(),
      child: const _{{feature_class}}View(),
    );
  }
}

class _{{feature_class}}View extends StatelessWidget {
  const _{{feature_class}}View();

  @override
  Widget build(BuildContext context) {
    final state = context.watch<{{feature_class}}Provider>();
    return Scaffold(
      appBar: AppBar(
        title: const Text('{{feature_title}}'),
        actions: const [ThemeModeButton()],
      ),
      body: Column(
        children: [
          if (state.error != null)
            MaterialBanner(
              content: Text(state.error!),
              actions: [
                TextButton(
                  onPressed: state.load,
                  child: const Text('Retry'),
                ),
              ],
            ),
          Expanded(
            child: state.isLoading
                ? const Center(child: CircularProgressIndicator())
                : {{feature_class}}List(items: state.items, onToggle: state.toggle),
          ),
        ],
      ),
      floatingActionButton: FloatingActionButton(
        onPressed: () async {
          final notifier = context.read<{{feature_class}}Provider>();
          final title = await showAdd{{feature_class}}Dialog(context);
          if (title != null) await notifier.add(title);
        },
        child: const Icon(Icons.add),
      ),
    );
  }
}
"#;

const PROVIDER_TEST: &str = r#"import 'package:flutter_test/flutter_test.dart';
import 'package:mocktail/mocktail.dart';
import 'package:{{app_name}}/core/errors/exceptions.dart';
import 'package:{{app_name}}/features/{{feature}}/data/repositories/{{feature}}_repository.dart';
import 'package:{{app_name}}/features/{{feature}}/presentation/providers/{{feature}}_provider.dart';

class _MockRepository extends Mock implements {{feature_class}}Repository {}

void main() {
  test('add then toggle updates the item list', () async {
    final provider = {{feature_class}}Provider({{feature_class}}Repository());
    await provider.load();
    await provider.add('first');

    expect(provider.items, hasLength(1));
    await provider.toggle(provider.items.single);
    expect(provider.items.single.done, isTrue);
    expect(provider.error, isNull);
  });

  test('repository errors surface as error text', () async {
    final repository = _MockRepository();
    when(() => repository.fetchAll()).thenThrow(const CacheException('disk full'));

    final provider = {{feature_class}}Provider(repository);
    await provider.load();

    expect(provider.error, 'disk full');
    expect(provider.isLoading, isFalse);
  });
}
"#;

// Riverpod (AsyncNotifier) plumbing

const RIVERPOD_STATE: &str = r#"import 'package:flutter_riverpod/flutter_riverpod.dart';

import '../../data/models/{{feature}}_item.dart';
import '../../data/repositories/{{feature}}_repository.dart';

final {{feature_camel}}RepositoryProvider = Provider<{{feature_class}}Repository>(
  (ref) => {{feature_class}}Repository(),
);

class {{feature_class}}Notifier extends AsyncNotifier<List<{{feature_class}}Item>> {
  {{feature_class}}Repository get _repository => ref.read({{feature_camel}}RepositoryProvider);

  @override
  Future<List<{{feature_class}}Item>> build() => _repository.fetchAll();

  Future<void> add(String title) async {
    state = await AsyncValue.guard(() async {
      await _repository.create(title);
      return _repository.fetchAll();
    });
  }

  Future<void> toggle({{feature_class}}Item item) async {
    state = await AsyncValue.guard(() async {
      await _repository.update(item.copyWith(done: !item.done));
      return _repository.fetchAll();
    });
  }
}

final {{feature_camel}}NotifierProvider =
    AsyncNotifierProvider<{{feature_class}}Notifier, List<{{feature_class}}Item>>(
  {{feature_class}}Notifier.new,
);
"#;

const RIVERPOD_PAGE: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';
import 'package:{{app_name}}/app/settings/theme_mode_button.dart';

import '../providers/{{feature}}_notifier.dart';
import '../widgets/{{feature}}_list.dart';

class {{feature_class}}Page extends ConsumerWidget {
  const {{feature_class}}Page({super.key});

  @override
  Widget build(BuildContext context, WidgetRef ref) {
    final items = ref.watch({{feature_camel}}NotifierProvider);
    final notifier = ref.read({{feature_camel}}NotifierProvider.notifier);

    return Scaffold(
      appBar: AppBar(
        title: const Text('{{feature_title}}'),
        actions: const [ThemeModeButton()],
      ),
      body: items.when(
        data: (items) => {{feature_class}}List(items: items, onToggle: notifier.toggle),
        loading: () => const Center(child: CircularProgressIndicator()),
        error: (error, _) => Center(
          child: Column(
            mainAxisSize: MainAxisSize.min,
            children: [
              Text('$error'),
              TextButton(
                onPressed: () => ref.invalidate({{feature_camel}}NotifierProvider),
                child: const Text('Retry'),
              ),
            ],
          ),
        ),
      ),
      floatingActionButton: FloatingActionButton(
        onPressed: () async {
          final title = await showAdd{{feature_class}}Dialog(context);
          if (title != null) await notifier.add(title);
        },
        child: const Icon(Icons.add),
      ),
    );
  }
}
"#;

const RIVERPOD_TEST: &str = r#"import 'package:flutter_riverpod/flutter_riverpod.dart';
import 'package:flutter_test/flutter_test.dart';
import 'package:mocktail/mocktail.dart';
import 'package:{{app_name}}/core/errors/exceptions.dart';
import 'package:{{app_name}}/features/{{feature}}/data/repositories/{{feature}}_repository.dart';
import 'package:{{app_name}}/features/{{feature}}/presentation/providers/{{feature}}_notifier.dart';

class _MockRepository extends Mock implements {{feature_class}}Repository {}

void main() {
  test('add then toggle updates the item list', () async {
    final container = ProviderContainer();
    addTearDown(container.dispose);

    await container.read({{feature_camel}}NotifierProvider.future);
    final notifier = container.read({{feature_camel}}NotifierProvider.notifier);
    await notifier.add('first');

    final items = container.read({{feature_camel}}NotifierProvider).requireValue;
    expect(items, hasLength(1));

    await notifier.toggle(items.single);
    expect(container.read({{feature_camel}}NotifierProvider).requireValue.single.done, isTrue);
  });

  test('repository errors become AsyncError', () async {
    final repository = _MockRepository();
    when(() => repository.fetchAll()).thenThrow(const CacheException('disk full'));

    final container = ProviderContainer(
      overrides: [{{feature_camel}}RepositoryProvider.overrideWithValue(repository)],
    );
    addTearDown(container.dispose);

    await expectLater(
      container.read({{feature_camel}}NotifierProvider.future),
      throwsA(isA<CacheException>()),
    );
    expect(container.read({{feature_camel}}NotifierProvider).hasError, isTrue);
  });
}
"#;

// Bloc (event/state reducer) plumbing

const BLOC_EVENT: &str = r#"import 'package:equatable/equatable.dart';

import '../../data/models/{{feature}}_item.dart';

sealed class {{feature_class}}Event extends Equatable {
  const {{feature_class}}Event();

  @override
  List<Object?> get props => [];
}

final class {{feature_class}}LoadRequested extends {{feature_class}}Event {
  const {{feature_class}}LoadRequested();
}

final class {{feature_class}}ItemAdded extends {{feature_class}}Event {
  const {{feature_class}}ItemAdded(this.title);

  final String title;

  @override
  List<Object?> get props => [title];
}

final class {{feature_class}}ItemToggled extends {{feature_class}}Event {
  const {{feature_class}}ItemToggled(this.item);

  final {{feature_class}}Item item;

  @override
  List<Object?> get props => [item];
}
"#;

const BLOC_STATE: &str = r#"import 'package:equatable/equatable.dart';

import '../../data/models/{{feature}}_item.dart';

enum {{feature_class}}Status { initial, loading, success, failure }

final class {{feature_class}}State extends Equatable {
  const {{feature_class}}State({
    this.status = {{feature_class}}Status.initial,
    this.items = const [],
    this.error,
  });

  final {{feature_class}}Status status;
  final List<{{feature_class}}Item> items;
  final String? error;

  {{feature_class}}State copyWith({
    {{feature_class}}Status? status,
    List<{{feature_class}}Item>? items,
    String? error,
  }) {
    return {{feature_class}}State(
      status: status ?? this.status,
      items: items ?? this.items,
      error: error,
    );
  }

  @override
  List<Object?> get props => [status, items, error];
}
"#;

const BLOC: &str = r#"import 'package:flutter_bloc/flutter_bloc.dart';
import 'package:{{app_name}}/core/errors/exceptions.dart';

import '../../data/repositories/{{feature}}_repository.dart';
import '{{feature}}_event.dart';
import '{{feature}}_state.dart';

export '{{feature}}_event.dart';
export '{{feature}}_state.dart';

class {{feature_class}}Bloc extends Bloc<{{feature_class}}Event, {{feature_class}}State> {
  {{feature_class}}Bloc(this._repository) : super(const {{feature_class}}State()) {
    on<{{feature_class}}LoadRequested>(_onLoadRequested);
    on<{{feature_class}}ItemAdded>(_onItemAdded);
    on<{{feature_class}}ItemToggled>(_onItemToggled);
  }

  final {{feature_class}}Repository _repository;

  Future<void> _onLoadRequested(
    {{feature_class}}LoadRequested event,
    Emitter<{{feature_class}}State> emit,
  ) async {
    emit(state.copyWith(status: {{feature_class}}Status.loading));
    await _refresh(emit);
  }

  Future<void> _onItemAdded(
    {{feature_class}}ItemAdded event,
    Emitter<{{feature_class}}State> emit,
  ) async {
    try {
      await _repository.create(event.title);
      await _refresh(emit);
    } on AppException catch (e) {
      emit(state.copyWith(status: {{feature_class}}Status.failure, error: e.message));
    }
  }

  Future<void> _onItemToggled(
    {{feature_class}}ItemToggled event,
    Emitter<{{feature_class}}State> emit,
  ) async {
    try {
      await _repository.update(event.item.copyWith(done: !event.item.done));
      await _refresh(emit);
    } on AppException catch (e) {
      emit(state.copyWith(status: {{feature_class}}Status.failure, error: e.message));
    }
  }

  Future<void> _refresh(Emitter<{{feature_class}}State> emit) async {
    try {
      final items = await _repository.fetchAll();
      emit(state.copyWith(status: {{feature_class}}Status.success, items: items));
    } on AppException catch (e) {
      emit(state.copyWith(status: {{feature_class}}Status.failure, error: e.message));
    }
  }
}
"#;

const BLOC_PAGE: &str = r#"import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';
import 'package:{{app_name}}/app/settings/theme_mode_button.dart';

import '../../data/repositories/{{feature}}_repository.dart';
import '../bloc/{{feature}}_bloc.dart';
import '../widgets/{{feature}}_list.dart';

class {{feature_class}}Page extends StatelessWidget {
  const {{feature_class}}Page({super.key});

  @override
  Widget build(BuildContext context) {
    return BlocProvider(
      create: (_) => {{feature_class}}Bloc({{feature_class}}Repository())
        ..add(const {{feature_class}}LoadRequested()),
      child: const _{{feature_class}}View(),
    );
  }
}

class _{{feature_class}}View extends StatelessWidget {
  const _{{feature_class}}View();

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(
        title: const Text('{{feature_title}}'),
        actions: const [ThemeModeButton()],
      ),
      body: BlocConsumer<{{feature_class}}Bloc, {{feature_class}}State>(
        listenWhen: (previous, current) => current.error != null,
        listener: (context, state) {
          ScaffoldMessenger.of(context).showSnackBar(
            SnackBar(content: Text(state.error!)),
          );
        },
        builder: (context, state) {
          if (state.status == {{feature_class}}Status.loading) {
            return const Center(child: CircularProgressIndicator());
          }
          return {{feature_class}}List(
            items: state.items,
            onToggle: (item) => context
                .read<{{feature_class}}Bloc>()
                .add({{feature_class}}ItemToggled(item)),
          );
        },
      ),
      floatingActionButton: FloatingActionButton(
        onPressed: () async {
          final bloc = context.read<{{feature_class}}Bloc>();
          final title = await showAdd{{feature_class}}Dialog(context);
          if (title != null) bloc.add({{feature_class}}ItemAdded(title));
        },
        child: const Icon(Icons.add),
      ),
    );
  }
}
"#;

const BLOC_TEST: &str = r#"import 'package:bloc_test/bloc_test.dart';
import 'package:flutter_test/flutter_test.dart';
import 'package:mocktail/mocktail.dart';
import 'package:{{app_name}}/core/errors/exceptions.dart';
import 'package:{{app_name}}/features/{{feature}}/data/models/{{feature}}_item.dart';
import 'package:{{app_name}}/features/{{feature}}/data/repositories/{{feature}}_repository.dart';
import 'package:{{app_name}}/features/{{feature}}/presentation/bloc/{{feature}}_bloc.dart';

class _MockRepository extends Mock implements {{feature_class}}Repository {}

void main() {
  blocTest<{{feature_class}}Bloc, {{feature_class}}State>(
    'emits loading then success on load',
    build: () => {{feature_class}}Bloc({{feature_class}}Repository()),
    act: (bloc) => bloc.add(const {{feature_class}}LoadRequested()),
    expect: () => const [
      {{feature_class}}State(status: {{feature_class}}Status.loading),
      {{feature_class}}State(status: {{feature_class}}Status.success),
    ],
  );

  blocTest<{{feature_class}}Bloc, {{feature_class}}State>(
    'adding an item refreshes the list',
    build: () => {{feature_class}}Bloc({{feature_class}}Repository()),
    act: (bloc) => bloc.add(const {{feature_class}}ItemAdded('first')),
    expect: () => const [
      {{feature_class}}State(
        status: {{feature_class}}Status.success,
        items: [{{feature_class}}Item(id: '1', title: 'first')],
      ),
    ],
  );

  blocTest<{{feature_class}}Bloc, {{feature_class}}State>(
    'repository errors emit failure',
    build: () {
      final repository = _MockRepository();
      when(() => repository.fetchAll()).thenThrow(const CacheException('disk full'));
      return {{feature_class}}Bloc(repository);
    },
    act: (bloc) => bloc.add(const {{feature_class}}LoadRequested()),
    expect: () => const [
      {{feature_class}}State(status: {{feature_class}}Status.loading),
      {{feature_class}}State(status: {{feature_class}}Status.failure, error: 'disk full'),
    ],
  );
}
"#;

const FEATURE_ROOT: &str = "lib/features/{{feature}}";
const FEATURE_TEST_ROOT: &str = "test/features/{{feature}}";

/// Every file of one feature module wired through `style`
pub fn files(feature: &str, style: StateManagement) -> Vec<TemplateFile> {
    let root = FEATURE_ROOT;
    let test_root = FEATURE_TEST_ROOT;
    let mut files = vec![
        feature_file(
            &format!("{root}/data/models/{{{{feature}}}}_item.dart"),
            feature,
            MODEL,
        ),
        feature_file(
            &format!("{root}/data/repositories/{{{{feature}}}}_repository.dart"),
            feature,
            REPOSITORY,
        ),
        feature_file(
            &format!("{root}/presentation/widgets/{{{{feature}}}}_list.dart"),
            feature,
            LIST_WIDGET,
        ),
    ];

    match style {
        StateManagement::Provider => files.extend([
            feature_file(
                &format!("{root}/presentation/providers/{{{{feature}}}}_provider.dart"),
                feature,
                PROVIDER_STATE,
            ),
            feature_file(
                &format!("{root}/presentation/pages/{{{{feature}}}}_page.dart"),
                feature,
                PROVIDER_PAGE,
            ),
            feature_file(
                &format!("{test_root}/{{{{feature}}}}_provider_test.dart"),
                feature,
                PROVIDER_TEST,
            )
            .when(gates::tests),
        ]),
        StateManagement::Riverpod => files.extend([
            feature_file(
                &format!("{root}/presentation/providers/{{{{feature}}}}_notifier.dart"),
                feature,
                RIVERPOD_STATE,
            ),
            feature_file(
                &format!("{root}/presentation/pages/{{{{feature}}}}_page.dart"),
                feature,
                RIVERPOD_PAGE,
            ),
            feature_file(
                &format!("{test_root}/{{{{feature}}}}_notifier_test.dart"),
                feature,
                RIVERPOD_TEST,
            )
            .when(gates::tests),
        ]),
        StateManagement::Bloc => files.extend([
            feature_file(
                &format!("{root}/presentation/bloc/{{{{feature}}}}_event.dart"),
                feature,
                BLOC_EVENT,
            ),
            feature_file(
                &format!("{root}/presentation/bloc/{{{{feature}}}}_state.dart"),
                feature,
                BLOC_STATE,
            ),
            feature_file(
                &format!("{root}/presentation/bloc/{{{{feature}}}}_bloc.dart"),
                feature,
                BLOC,
            ),
            feature_file(
                &format!("{root}/presentation/pages/{{{{feature}}}}_page.dart"),
                feature,
                BLOC_PAGE,
            ),
            feature_file(
                &format!("{test_root}/{{{{feature}}}}_bloc_test.dart"),
                feature,
                BLOC_TEST,
            )
            .when(gates::tests),
        ]),
    }

    files.push(
        feature_file(
            &format!("{test_root}/{{{{feature}}}}_repository_test.dart"),
            feature,
            REPOSITORY_TEST,
        )
        .when(gates::tests),
    );
    files
}
