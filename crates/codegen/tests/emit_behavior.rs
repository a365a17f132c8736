use kotgen_codegen::{emits_unit, fun_for_method, kotlin_file_for_class};
use kotgen_java::{JavaParser, SourceUnit};

fn parse(source: &str) -> SourceUnit {
    JavaParser::new().unwrap().parse_source(source).unwrap()
}

const RX_TEXT_VIEW: &str = r#"
package com.example.rxbinding.widget;

import android.support.annotation.CheckResult;
import android.support.annotation.NonNull;
import android.widget.TextView;
import rx.Observable;
import rx.functions.Func1;

public final class RxTextView {
  /**
   * Create an observable of editor actions on {@code view}.
   * <p>
   * <em>Warning:</em> The created observable keeps a strong reference to {@code view}. Unsubscribe
   * to free this reference.
   */
  @CheckResult @NonNull
  public static Observable<Integer> editorActions(@NonNull TextView view,
      @NonNull Func1<? super Integer, Boolean> handled) {
    checkNotNull(view, "view == null");
    checkNotNull(handled, "handled == null");
    return new TextViewEditorActionObservable(view, handled);
  }
}
"#;

#[test]
fn emits_receiver_parameters_and_delegating_body() {
    let unit = parse(RX_TEXT_VIEW);
    let class = &unit.classes[0];
    let fun = fun_for_method(&class.methods[0], &class.name, &unit.imports).unwrap();

    assert_eq!(fun.receiver.to_string(), "TextView");
    assert_eq!(fun.parameters.len(), 1);
    assert_eq!(fun.parameters[0].name, "handled");
    assert_eq!(
        fun.parameters[0].type_name.to_string(),
        "Func1<in Int, Boolean>"
    );
    assert_eq!(fun.returns.to_string(), "Observable<Int>");
    assert_eq!(fun.body, "RxTextView.editorActions(this, handled)");
    assert!(!fun.unit_mapped);
}

const RX_VIEW: &str = r#"
package com.example.rxbinding.view;

import android.support.annotation.CheckResult;
import android.support.annotation.NonNull;
import android.view.View;
import rx.Observable;

public final class RxView {
  /**
   * Create an observable which emits on {@code view} click events. The emitted value is
   * unspecified and should only be used as notification.
   */
  @CheckResult @NonNull
  public static Observable<Void> clicks(@NonNull View view) {
    checkNotNull(view, "view == null");
    return new ViewClickObservable(view);
  }
}
"#;

#[test]
fn unit_mapped_methods_chain_the_void_adapter() {
    let unit = parse(RX_VIEW);
    let class = &unit.classes[0];
    let method = &class.methods[0];
    assert!(emits_unit(&method.return_type));

    let fun = fun_for_method(method, &class.name, &unit.imports).unwrap();
    assert_eq!(fun.returns.to_string(), "Observable<Unit>");
    assert!(fun.body.ends_with(".map(VoidToUnit)"));
    assert_eq!(fun.body, "RxView.clicks(this).map(VoidToUnit)");
}

#[test]
fn renders_a_complete_file_in_committed_style() {
    let unit = parse(RX_VIEW);
    let class = &unit.classes[0];
    let file = kotlin_file_for_class(class, unit.package.as_deref(), &unit.imports).unwrap();

    assert_eq!(
        file.render(),
        "package com.example.rxbinding.view\n\
         \n\
         import android.view.View\n\
         import com.jakewharton.rxbinding.internal.VoidToUnit\n\
         import rx.Observable\n\
         \n\
         /**\n\
         \x20* Create an observable which emits on `view` click events. The emitted value is\n\
         \x20* unspecified and should only be used as notification.\n\
         \x20*/\n\
         public inline fun View.clicks(): Observable<Unit> = RxView.clicks(this).map(VoidToUnit)\n"
    );
}

const RX_ADAPTER_VIEW: &str = r#"
package com.example.rxbinding.widget;

import android.support.annotation.CheckResult;
import android.support.annotation.NonNull;
import android.widget.Adapter;
import android.widget.AdapterView;
import rx.Observable;

public final class RxAdapterView {
  /**
   * Create an observable of the selected position of {@code view}. If nothing is selected,
   * {@link AdapterView#INVALID_POSITION} will be emitted.
   */
  @CheckResult @NonNull
  public static <T extends Adapter> Observable<Integer> itemSelections(@NonNull AdapterView<T> view) {
    checkNotNull(view, "view == null");
    return new AdapterViewItemSelectionObservable(view);
  }
}
"#;

#[test]
fn method_type_parameters_carry_their_first_bound() {
    let unit = parse(RX_ADAPTER_VIEW);
    let class = &unit.classes[0];
    let fun = fun_for_method(&class.methods[0], &class.name, &unit.imports).unwrap();

    assert_eq!(fun.type_variables.len(), 1);
    assert_eq!(fun.type_variables[0].name, "T");
    assert_eq!(fun.type_variables[0].bound.to_string(), "Adapter");
    assert_eq!(fun.receiver.to_string(), "AdapterView<T>");

    let mut out = String::new();
    fun.render(&mut out);
    assert!(out.contains(
        "public inline fun <T : Adapter> AdapterView<T>.itemSelections(): Observable<Int> = \
         RxAdapterView.itemSelections(this)"
    ));
    // The doc reference tag was rewritten on the way through.
    assert!(out.contains("[AdapterView.INVALID_POSITION]"));
}

#[test]
fn generation_is_deterministic_across_runs() {
    let first = {
        let unit = parse(RX_TEXT_VIEW);
        let class = &unit.classes[0];
        kotlin_file_for_class(class, unit.package.as_deref(), &unit.imports)
            .unwrap()
            .render()
    };
    let second = {
        let unit = parse(RX_TEXT_VIEW);
        let class = &unit.classes[0];
        kotlin_file_for_class(class, unit.package.as_deref(), &unit.imports)
            .unwrap()
            .render()
    };
    assert_eq!(first, second);
}

#[test]
fn a_method_without_receiver_aborts_generation() {
    let unit = parse(
        "public final class RxBroken {\n\
         public static int count() { return 0; }\n\
         }\n",
    );
    let class = &unit.classes[0];
    let err = kotlin_file_for_class(class, None, &unit.imports).unwrap_err();
    assert!(err.to_string().contains("count"));
}
