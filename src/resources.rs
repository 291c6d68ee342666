use crate::language::Language;

/// Documentation links for Python code, keyed by topic.
const PYTHON_RESOURCES: &[(&str, &str)] = &[
    (
        "naming",
        "[PEP 8 - Naming Conventions](https://peps.python.org/pep-0008/#naming-conventions)",
    ),
    (
        "performance",
        "[Python Performance Tips](https://wiki.python.org/moin/PythonSpeed/PerformanceTips)",
    ),
    (
        "comprehension",
        "[List Comprehensions](https://docs.python.org/3/tutorial/datastructures.html#list-comprehensions)",
    ),
    ("style", "[PEP 8 - Style Guide](https://peps.python.org/pep-0008/)"),
    (
        "docstrings",
        "[PEP 257 - Docstring Conventions](https://peps.python.org/pep-0257/)",
    ),
];

/// Documentation links for JavaScript code, keyed by topic.
const JAVASCRIPT_RESOURCES: &[(&str, &str)] = &[
    (
        "naming",
        "[JavaScript Naming Conventions](https://developer.mozilla.org/en-US/docs/MDN/Writing_guidelines/Writing_style_guide/Code_style_guide/JavaScript#naming_conventions)",
    ),
    (
        "performance",
        "[JavaScript Performance Best Practices](https://developer.mozilla.org/en-US/docs/Learn/Performance/JavaScript)",
    ),
    (
        "style",
        "[Airbnb JavaScript Style Guide](https://github.com/airbnb/javascript)",
    ),
    (
        "async",
        "[Async/Await Best Practices](https://developer.mozilla.org/en-US/docs/Learn/JavaScript/Asynchronous/Async_await)",
    ),
    (
        "es6",
        "[ES6 Features Guide](https://developer.mozilla.org/en-US/docs/Web/JavaScript/New_in_JavaScript/ECMAScript_6_support_in_Mozilla)",
    ),
];

/// Documentation links for Java code, keyed by topic.
const JAVA_RESOURCES: &[(&str, &str)] = &[
    (
        "naming",
        "[Java Naming Conventions](https://www.oracle.com/java/technologies/javase/codeconventions-namingconventions.html)",
    ),
    (
        "performance",
        "[Java Performance Tuning](https://docs.oracle.com/javase/8/docs/technotes/guides/performance/)",
    ),
    (
        "style",
        "[Google Java Style Guide](https://google.github.io/styleguide/javaguide.html)",
    ),
    (
        "concurrency",
        "[Java Concurrency Tutorial](https://docs.oracle.com/javase/tutorial/essential/concurrency/)",
    ),
];

/// Documentation links for C++ code, keyed by topic.
const CPP_RESOURCES: &[(&str, &str)] = &[
    (
        "naming",
        "[C++ Core Guidelines - Naming](https://isocpp.github.io/CppCoreGuidelines/CppCoreGuidelines#S-naming)",
    ),
    (
        "performance",
        "[C++ Performance Guidelines](https://isocpp.github.io/CppCoreGuidelines/CppCoreGuidelines#S-performance)",
    ),
    (
        "style",
        "[Google C++ Style Guide](https://google.github.io/styleguide/cppguide.html)",
    ),
    (
        "modern",
        "[Modern C++ Best Practices](https://isocpp.github.io/CppCoreGuidelines/CppCoreGuidelines)",
    ),
];

/// Documentation links for Go code, keyed by topic.
const GO_RESOURCES: &[(&str, &str)] = &[
    (
        "naming",
        "[Go Code Review Comments](https://github.com/golang/go/wiki/CodeReviewComments)",
    ),
    (
        "performance",
        "[Go Performance Tips](https://github.com/golang/go/wiki/Performance)",
    ),
    ("style", "[Effective Go](https://golang.org/doc/effective_go.html)"),
    (
        "fmt",
        "[Go Formatting Guidelines](https://golang.org/doc/effective_go.html#formatting)",
    ),
];

/// A documentation reference surfaced because a comment matched a topic
/// trigger. Never mutated after selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceLink {
    /// Topic key within the language's resource table
    pub topic: &'static str,
    /// Markdown link label, e.g. `[PEP 8 - Style Guide](https://...)`
    pub label: &'static str,
}

/// Returns the resource table for a language.
fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::Python => PYTHON_RESOURCES,
        Language::Javascript => JAVASCRIPT_RESOURCES,
        Language::Java => JAVA_RESOURCES,
        Language::Cpp => CPP_RESOURCES,
        Language::Go => GO_RESOURCES,
    }
}

/// Looks up a topic in the language's resource table. Topics missing from
/// a table produce no entry rather than an empty placeholder.
fn lookup(language: Language, topic: &str) -> Option<ResourceLink> {
    table(language)
        .iter()
        .find(|(key, _)| *key == topic)
        .map(|&(topic, label)| ResourceLink { topic, label })
}

/// Selects documentation links relevant to one review comment.
///
/// Generic topic triggers are tested against the lower-cased comment, then
/// language-specific ones; multiple triggers may fire, in declaration
/// order. The python style trigger additionally inspects the *code* for
/// redundant boolean comparisons. Duplicates are left in place here and
/// removed at report-assembly time, preserving first-seen order.
pub fn resources_for(
    comment: &str,
    code_snippet: &str,
    language: Language,
) -> Vec<ResourceLink> {
    let comment = comment.to_lowercase();
    let code = code_snippet.to_lowercase();
    let mut links = Vec::new();

    if comment.contains("variable") || comment.contains("naming") {
        links.extend(lookup(language, "naming"));
    }
    if comment.contains("efficient") || comment.contains("performance") || comment.contains("loop")
    {
        links.extend(lookup(language, "performance"));
    }
    if comment.contains("style") || comment.contains("formatting") {
        links.extend(lookup(language, "style"));
    }

    match language {
        Language::Python => {
            if comment.contains("comprehension") {
                links.extend(lookup(language, "comprehension"));
            }
            if code.contains("== true") || code.contains("== false") {
                links.extend(lookup(language, "style"));
            }
            if comment.contains("function") || comment.contains("docstring") {
                links.extend(lookup(language, "docstrings"));
            }
        }
        Language::Javascript => {
            if comment.contains("async") || comment.contains("promise") {
                links.extend(lookup(language, "async"));
            }
            if comment.contains("es6") || comment.contains("arrow") || comment.contains("const") {
                links.extend(lookup(language, "es6"));
            }
        }
        Language::Java => {
            if comment.contains("thread") || comment.contains("concurrent") {
                links.extend(lookup(language, "concurrency"));
            }
        }
        Language::Cpp => {
            if comment.contains("modern") || comment.contains("c++11") || comment.contains("c++14")
            {
                links.extend(lookup(language, "modern"));
            }
        }
        Language::Go => {
            if comment.contains("format") || comment.contains("gofmt") {
                links.extend(lookup(language, "fmt"));
            }
        }
    }

    links
}
