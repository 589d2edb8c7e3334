//! Complexity analyzer - heuristic Big-O narration for C-like snippets.
//!
//! # Overview
//!
//! No lexing, no parsing. The analyzer scans raw text for four independent
//! signals and turns them into a fixed, step-by-step derivation:
//!
//! - **Loops**: lines whose trimmed text starts with `for` or `while`, and the
//!   deepest nesting reached while walking the lines top to bottom.
//! - **Recursion**: the first function-definition-shaped match whose name
//!   reappears followed by `(`.
//! - **Binary search** and **linear search**: conjunctions of fixed regular
//!   expressions over the whole text.
//!
//! Recursive snippets are narrated with a master-theorem substitution that
//! fixes `b = 2` and `f(n) = n`.
//!
//! The heuristics are deliberately shallow and their quirks are part of the
//! observable behavior: `forward = 1;` counts as a loop, a closing brace
//! sharing a line with anything else does not close a level, and the call
//! count includes the definition itself.
//!
//! # Example
//!
//! ```
//! use bigo::analyzers::complexity::analyze;
//!
//! let analysis = analyze("for (int i = 0; i < n; i++) {\n  sum += i;\n}\n");
//! assert!(analysis.to_text().contains("O(n)"));
//! ```

use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Message returned instead of narration for empty or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please provide source text.";

/// Divisor of the assumed divide-and-conquer recurrence.
const MASTER_B: u32 = 2;

/// Tolerance for treating `log_b(a)` as exactly 1.
const CASE2_EPSILON: f64 = 0.01;

/// Signals extracted from one snippet. Rebuilt on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSignals {
    /// Lines whose trimmed text starts with `for` or `while`.
    pub loop_count: usize,
    /// Maximum running loop depth reached.
    pub loop_depth: usize,
    /// Self-invocation of the first function found, if any.
    pub recursion: Option<Recursion>,
    /// All four binary-search patterns matched.
    pub is_binary_search: bool,
    /// Both linear-search patterns matched.
    pub is_linear_search: bool,
}

impl AnalysisSignals {
    /// Compute every signal for `source`.
    ///
    /// The scans are independent of one another and share nothing but the
    /// input text.
    pub fn scan(source: &str) -> Self {
        let loops = LoopScan::scan(source);
        Self {
            loop_count: loops.count,
            loop_depth: loops.max_depth,
            recursion: detect_recursion(source),
            is_binary_search: is_binary_search(source),
            is_linear_search: is_linear_search(source),
        }
    }
}

/// A function whose name reappears as a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recursion {
    /// Name captured from the first function definition.
    pub function_name: String,
    /// Occurrences of `name(` in the text, definition included. Always >= 2.
    pub call_count: usize,
}

impl Recursion {
    /// `log_b(a)` with `a` the call count and `b` fixed at 2.
    pub fn critical_exponent(&self) -> f64 {
        (self.call_count as f64).ln() / f64::from(MASTER_B).ln()
    }
}

/// Result of the line-oriented loop scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopScan {
    /// Loop-start lines seen.
    pub count: usize,
    /// Deepest running depth.
    pub max_depth: usize,
}

/// Trim whitespace and byte-order marks from both ends.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl LoopScan {
    /// Walk `source` line by line.
    ///
    /// A trimmed line starting with `for` or `while` opens a level; a trimmed
    /// line that is exactly `}` closes one, never going below zero. Any other
    /// brace placement is invisible to the scan.
    pub fn scan(source: &str) -> Self {
        let mut scan = Self::default();
        let mut depth = 0usize;

        for line in source.lines() {
            let trimmed = trim_text(line);
            if trimmed.starts_with("for") || trimmed.starts_with("while") {
                scan.count += 1;
                depth += 1;
                scan.max_depth = scan.max_depth.max(depth);
            }
            if trimmed == "}" {
                depth = depth.saturating_sub(1);
            }
        }

        scan
    }
}

/// Compiled detection patterns, shared read-only by every call.
struct Patterns {
    /// `name(args) { ... }`; the body is greedy up to the last `}` in the text.
    function_definition: Regex,
    /// `while (... < ...)` or `while (... <= ...)`.
    bounded_while: Regex,
    /// `mid = low + high`, optionally parenthesised.
    midpoint: Regex,
    /// `if (... == ...)`.
    equality_if: Regex,
    /// `else if (... <`.
    else_if_less: Regex,
    /// `for (... i ... < ... n ...)`.
    index_bounded_for: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        function_definition: Regex::new(r"([0-9A-Za-z_]+)\s*\([^)]*\)\s*\{((?s:.*))\}")
            .expect("valid regex"),
        bounded_while: Regex::new(r"while\s*\([^)]*<=?[^)]*\)").expect("valid regex"),
        midpoint: Regex::new(r"mid\s*=\s*\(?[^)]*low\s*\+\s*high[^)]*\)?").expect("valid regex"),
        equality_if: Regex::new(r"if\s*\([^)]*==[^)]*\)").expect("valid regex"),
        else_if_less: Regex::new(r"else\s+if\s*\([^)]*<").expect("valid regex"),
        index_bounded_for: Regex::new(r"for\s*\([^)]*i[^)]*<[^)]*n[^)]*\)")
            .expect("valid regex"),
    })
}

/// Find the first function definition and count how often its name is
/// followed by `(` anywhere in the text.
///
/// Returns `None` when nothing definition-shaped matches or when the name
/// occurs only once. Names are matched as plain substrings, so `fib(` inside
/// `myfib(` counts too.
pub fn detect_recursion(source: &str) -> Option<Recursion> {
    let captures = patterns().function_definition.captures(source)?;
    let name = captures.get(1)?.as_str();

    let call = match Regex::new(&format!(r"{}\s*\(", regex::escape(name))) {
        Ok(re) => re,
        Err(err) => {
            tracing::warn!("Skipping recursion check for {name}: {err}");
            return None;
        }
    };
    let call_count = call.find_iter(source).count();
    tracing::debug!("Function {name} occurs {call_count} time(s) as a call");

    (call_count >= 2).then(|| Recursion {
        function_name: name.to_string(),
        call_count,
    })
}

/// True when the text has a bounded `while`, a `mid` computed from `low` and
/// `high`, an `if` with `==` and an `else if` with `<`.
pub fn is_binary_search(source: &str) -> bool {
    let p = patterns();
    p.bounded_while.is_match(source)
        && p.midpoint.is_match(source)
        && p.equality_if.is_match(source)
        && p.else_if_less.is_match(source)
}

/// True when the text has a `for` whose header mentions `i` then `<` then `n`,
/// and an `if` with `==`.
pub fn is_linear_search(source: &str) -> bool {
    let p = patterns();
    p.index_bounded_for.is_match(source) && p.equality_if.is_match(source)
}

/// One line of narration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationLine {
    /// Line content.
    pub text: String,
    /// Rendered after a blank line in plain text.
    pub section_break: bool,
}

/// Ordered narration produced from a set of signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narration {
    lines: Vec<NarrationLine>,
}

impl Narration {
    /// Render the fixed decision tree for `signals`.
    pub fn from_signals(signals: &AnalysisSignals) -> Self {
        let mut narration = Self::default();
        narration.push("🔍 Code Analysis Started");

        if signals.loop_count > 0 {
            narration.section(format!("➡️ Detected {} loop(s)", signals.loop_count));
            narration.push(format!("➡️ Loop nesting level: {}", signals.loop_depth));
            narration.loop_complexity(signals);
        } else {
            narration.section("❌ No loops detected");
        }

        if let Some(recursion) = &signals.recursion {
            narration.master_theorem(recursion);
        }

        if signals.loop_count == 0 && signals.recursion.is_none() {
            narration.section("📦 No loops or recursion detected → O(1)");
            narration.push("T(n) = C1");
        }

        narration
    }

    fn loop_complexity(&mut self, signals: &AnalysisSignals) {
        if signals.is_binary_search {
            self.section("🔎 Detected pattern of Binary Search");
            self.push("➡️ Time Complexity: O(log n)");
            self.section("T(n) = C1 + C2·log₂(n)");
        } else if signals.is_linear_search {
            self.section("🔎 Detected pattern of Linear Search");
            self.push("➡️ Time Complexity: O(n)");
            self.section("T(n) = C1 + C2·n");
        } else {
            match signals.loop_depth {
                1 => {
                    self.push("➡️ Time Complexity: O(n)");
                    self.section("T(n) = C1 + C2·n");
                }
                2 => {
                    self.push("➡️ Time Complexity: O(n²)");
                    self.section("T(n) = C1 + C2·n + C3·n²");
                }
                depth => {
                    self.push(format!("➡️ Time Complexity: O(n^{depth})"));
                    self.section(format!(
                        "T(n) = C1 + C2·n + ... + C{}·n^{depth}",
                        depth + 1
                    ));
                }
            }
        }
    }

    fn master_theorem(&mut self, recursion: &Recursion) {
        let a = recursion.call_count;
        let b = MASTER_B;
        let f = "n";

        self.section(format!(
            "🔁 Recursive function detected: {}",
            recursion.function_name
        ));
        self.push(format!("➡️ Recursive calls: {a}"));
        self.push("➡️ Assuming divide-and-conquer form: T(n) = a·T(n/b) + f(n)");

        let x = recursion.critical_exponent();
        self.section(format!("Step 1: T(n) = {a}·T(n/{b}) + C·{f}"));
        self.push(format!("Step 2: log_b(a) = log_{b}({a}) = {x:.2}"));
        self.push(format!(
            "Step 3: Compare f(n) = Θ({f}) to n^log_b(a) = Θ(n^{x:.2})"
        ));

        if (x - 1.0).abs() < CASE2_EPSILON {
            self.push("→ Case 2: f(n) = Θ(n^log_b(a)) ⇒ T(n) = Θ(n log n)");
            self.section("🟢 Final Time Complexity: O(n log n)");
        } else if x > 1.0 {
            self.push(format!("→ Case 1: T(n) = Θ(n^{x:.2})"));
        } else {
            self.push("→ Case 3: T(n) = Θ(n)");
        }
    }

    fn push(&mut self, text: impl Into<String>) {
        self.lines.push(NarrationLine {
            text: text.into(),
            section_break: false,
        });
    }

    fn section(&mut self, text: impl Into<String>) {
        self.lines.push(NarrationLine {
            text: text.into(),
            section_break: true,
        });
    }

    /// All lines in order.
    pub fn lines(&self) -> &[NarrationLine] {
        &self.lines
    }

    /// Line texts without section markers.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Plain-text rendering, one line per entry, blank line before sections.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if line.section_break {
                writeln!(f)?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

/// Outcome of analyzing one snippet.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// Input was empty or whitespace-only; nothing was analyzed.
    Empty,
    /// Signals and the narration derived from them.
    Narrated {
        signals: AnalysisSignals,
        narration: Narration,
    },
}

impl Analysis {
    /// Signals, unless the input was empty.
    pub fn signals(&self) -> Option<&AnalysisSignals> {
        match self {
            Self::Empty => None,
            Self::Narrated { signals, .. } => Some(signals),
        }
    }

    /// Narration, unless the input was empty.
    pub fn narration(&self) -> Option<&Narration> {
        match self {
            Self::Empty => None,
            Self::Narrated { narration, .. } => Some(narration),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text suitable for direct display.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => EMPTY_INPUT_MESSAGE.to_string(),
            Self::Narrated { narration, .. } => narration.to_text(),
        }
    }
}

/// Analyze `source` and narrate its estimated time complexity.
///
/// Never fails. Calls share no state, so repeated calls on the same text
/// produce identical output.
pub fn analyze(source: &str) -> Analysis {
    if trim_text(source).is_empty() {
        tracing::debug!("Empty input, skipping analysis");
        return Analysis::Empty;
    }

    let start = Instant::now();
    let signals = AnalysisSignals::scan(source);
    tracing::debug!(?signals, "Signals computed");

    let narration = Narration::from_signals(&signals);
    tracing::info!(
        "Complexity analysis completed in {:?}: {} loop(s), depth {}, recursion: {}",
        start.elapsed(),
        signals.loop_count,
        signals.loop_depth,
        signals.recursion.is_some()
    );

    Analysis::Narrated { signals, narration }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUBBLE_SORT: &str = "void bubbleSort(int arr[], int n) {
  for (int i = 0; i < n - 1; i++) {
    for (int j = 0; j < n - i - 1; j++) {
      if (arr[j] > arr[j + 1]) {
        int temp = arr[j];
        arr[j] = arr[j + 1];
        arr[j + 1] = temp;
      }
    }
  }
}";

    const SUM: &str = "int sum(int arr[], int n) {
    int total = 0;
    for (int i = 0; i < n; i++) {
        total += arr[i];
    }
    return total;
}";

    const ADD: &str = "int add(int a, int b) {
    return a + b;
}";

    const FIB: &str = "int fib(int n) {
    if (n <= 1) return n;
    return fib(n - 1) + fib(n - 2);
}";

    const HALVE: &str = "void halve(int n) {
    if (n > 0) {
        halve(n / 2);
    }
}";

    const BINARY_SEARCH: &str = "int binarySearch(int arr[], int n, int target) {
    int low = 0, high = n - 1;
    while (low <= high) {
        int mid = (low + high) / 2;
        if (arr[mid] == target) {
            return mid;
        } else if (arr[mid] < target) {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    return -1;
}";

    const LINEAR_SEARCH: &str = "int search(int arr[], int n, int x) {
    for (int i = 0; i < n; i++) {
        if (arr[i] == x) {
            return i;
        }
    }
    return -1;
}";

    fn narrated(source: &str) -> (AnalysisSignals, Vec<String>) {
        match analyze(source) {
            Analysis::Narrated { signals, narration } => (
                signals,
                narration.texts().into_iter().map(String::from).collect(),
            ),
            Analysis::Empty => panic!("Expected narration"),
        }
    }

    #[test]
    fn test_empty_input() {
        for source in ["", "   ", "\n\t  \n", "\u{feff}", "\u{feff}\n  "] {
            let analysis = analyze(source);
            assert!(analysis.is_empty());
            assert!(analysis.narration().is_none());
            assert_eq!(analysis.to_text(), EMPTY_INPUT_MESSAGE);
        }
    }

    #[test]
    fn test_constant_time() {
        let (signals, lines) = narrated(ADD);
        assert_eq!(signals.loop_count, 0);
        assert!(signals.recursion.is_none());
        assert_eq!(
            lines,
            vec![
                "🔍 Code Analysis Started",
                "❌ No loops detected",
                "📦 No loops or recursion detected → O(1)",
                "T(n) = C1",
            ]
        );
    }

    #[test]
    fn test_single_loop_is_linear() {
        let (signals, lines) = narrated(SUM);
        assert_eq!(signals.loop_count, 1);
        assert_eq!(signals.loop_depth, 1);
        assert!(!signals.is_linear_search);
        assert!(lines.contains(&"➡️ Time Complexity: O(n)".to_string()));
        assert_eq!(lines.last().unwrap(), "T(n) = C1 + C2·n");
    }

    #[test]
    fn test_nested_loops_are_quadratic() {
        let (signals, lines) = narrated(BUBBLE_SORT);
        assert_eq!(signals.loop_count, 2);
        assert_eq!(signals.loop_depth, 2);
        assert!(signals.recursion.is_none());
        assert!(!signals.is_binary_search);
        assert!(!signals.is_linear_search);
        assert_eq!(
            lines,
            vec![
                "🔍 Code Analysis Started",
                "➡️ Detected 2 loop(s)",
                "➡️ Loop nesting level: 2",
                "➡️ Time Complexity: O(n²)",
                "T(n) = C1 + C2·n + C3·n²",
            ]
        );
    }

    #[test]
    fn test_deep_nesting_expands_polynomial() {
        let source = "for (a = 0; a < n; a++) {
for (b = 0; b < n; b++) {
for (c = 0; c < n; c++) {
work();
}
}
}";
        let (signals, lines) = narrated(source);
        assert_eq!(signals.loop_depth, 3);
        assert!(lines.contains(&"➡️ Time Complexity: O(n^3)".to_string()));
        assert!(lines.contains(&"T(n) = C1 + C2·n + ... + C4·n^3".to_string()));
    }

    #[test]
    fn test_text_rendering_inserts_blank_lines() {
        let text = analyze(BUBBLE_SORT).to_text();
        assert_eq!(
            text,
            "🔍 Code Analysis Started\n\n➡️ Detected 2 loop(s)\n➡️ Loop nesting level: 2\n\
             ➡️ Time Complexity: O(n²)\n\nT(n) = C1 + C2·n + C3·n²"
        );
    }

    #[test]
    fn test_recursion_case_one() {
        let (signals, lines) = narrated(FIB);
        let recursion = signals.recursion.unwrap();
        assert_eq!(recursion.function_name, "fib");
        assert_eq!(recursion.call_count, 3);
        assert!(lines.contains(&"🔁 Recursive function detected: fib".to_string()));
        assert!(lines.contains(&"Step 1: T(n) = 3·T(n/2) + C·n".to_string()));
        assert!(lines.contains(&"Step 2: log_b(a) = log_2(3) = 1.58".to_string()));
        assert!(lines
            .contains(&"Step 3: Compare f(n) = Θ(n) to n^log_b(a) = Θ(n^1.58)".to_string()));
        assert_eq!(lines.last().unwrap(), "→ Case 1: T(n) = Θ(n^1.58)");
    }

    #[test]
    fn test_recursion_case_two() {
        let (signals, lines) = narrated(HALVE);
        assert_eq!(signals.recursion.unwrap().call_count, 2);
        assert!(lines
            .contains(&"→ Case 2: f(n) = Θ(n^log_b(a)) ⇒ T(n) = Θ(n log n)".to_string()));
        assert_eq!(lines.last().unwrap(), "🟢 Final Time Complexity: O(n log n)");
    }

    #[test]
    fn test_recursion_follows_loop_narration() {
        let source = "void walk(int n) {
    for (int k = 0; k < n; k++) {
        visit(k);
    }
    walk(n / 2);
    walk(n / 2);
}";
        let (_, lines) = narrated(source);
        let loops = lines.iter().position(|l| l == "➡️ Time Complexity: O(n)").unwrap();
        let recursion = lines
            .iter()
            .position(|l| l.starts_with("🔁 Recursive function detected"))
            .unwrap();
        assert!(loops < recursion);
        assert!(!lines.iter().any(|l| l.contains("O(1)")));
    }

    #[test]
    fn test_binary_search() {
        let (signals, lines) = narrated(BINARY_SEARCH);
        assert!(signals.is_binary_search);
        assert_eq!(signals.loop_depth, 1);
        assert!(lines.contains(&"🔎 Detected pattern of Binary Search".to_string()));
        assert!(lines.contains(&"➡️ Time Complexity: O(log n)".to_string()));
        assert_eq!(lines.last().unwrap(), "T(n) = C1 + C2·log₂(n)");
    }

    #[test]
    fn test_binary_search_takes_precedence_over_linear() {
        let source = "int find(int arr[], int n, int x) {
    for (int i = 0; i < n; i++) {
        if (arr[i] == x) return i;
    }
    int low = 0, high = n - 1;
    while (low <= high) {
        int mid = low + high;
        if (arr[mid] == x) {
            return mid;
        } else if (arr[mid] < x) {
            low = mid + 1;
        }
    }
    return -1;
}";
        let (signals, lines) = narrated(source);
        assert!(signals.is_binary_search);
        assert!(signals.is_linear_search);
        assert!(lines.contains(&"🔎 Detected pattern of Binary Search".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Linear Search")));
        assert_eq!(
            lines.iter().filter(|l| l.contains("Binary Search")).count(),
            1
        );
    }

    #[test]
    fn test_linear_search() {
        let (signals, lines) = narrated(LINEAR_SEARCH);
        assert!(signals.is_linear_search);
        assert!(!signals.is_binary_search);
        assert!(lines.contains(&"🔎 Detected pattern of Linear Search".to_string()));
        assert_eq!(lines.iter().filter(|l| l.contains("Linear Search")).count(), 1);
        assert_eq!(lines.last().unwrap(), "T(n) = C1 + C2·n");
    }

    #[test]
    fn test_search_patterns_without_loops_are_silent() {
        let source = "if (a == b) { x(); } else if (a < b) { y(); }";
        let (signals, lines) = narrated(source);
        assert_eq!(signals.loop_count, 0);
        assert!(!lines.iter().any(|l| l.contains("Search")));
    }

    #[test]
    fn test_loop_prefix_without_word_boundary() {
        let scan = LoopScan::scan("forward = 1;\nwhileCount++;\n");
        assert_eq!(scan.count, 2);
        assert_eq!(scan.max_depth, 2);
    }

    #[test]
    fn test_depth_floors_at_zero() {
        let scan = LoopScan::scan("}\n}\nfor (;;) {\n}\n");
        assert_eq!(scan, LoopScan { count: 1, max_depth: 1 });
    }

    #[test]
    fn test_inline_closing_brace_does_not_decrement() {
        let scan = LoopScan::scan("for (;;) { a(); }\nfor (;;) { b(); }\n");
        assert_eq!(scan.count, 2);
        assert_eq!(scan.max_depth, 2);
    }

    #[test]
    fn test_unbraced_body_under_counts_decrements() {
        let source = "while (a)\n    a--;\nwhile (b) {\n    b--;\n}\n";
        assert_eq!(LoopScan::scan(source).max_depth, 2);
    }

    #[test]
    fn test_byte_order_mark_does_not_hide_loop() {
        let scan = LoopScan::scan("\u{feff}for (;;) {\n}\n");
        assert_eq!(scan, LoopScan { count: 1, max_depth: 1 });
    }

    #[test]
    fn test_recursion_picks_up_control_keyword() {
        let source = "while (x) {\n    while (y) { y--; }\n}\n";
        let recursion = detect_recursion(source).unwrap();
        assert_eq!(recursion.function_name, "while");
        assert_eq!(recursion.call_count, 2);

        let (_, lines) = narrated(source);
        assert!(lines.contains(&"🔁 Recursive function detected: while".to_string()));
    }

    #[test]
    fn test_recursion_requires_definition() {
        assert!(detect_recursion("x = f(1) + f(2);").is_none());
    }

    #[test]
    fn test_recursion_uses_first_function_only() {
        let source = "void a() {\n}\nvoid b() {\n    b();\n}\n";
        assert!(detect_recursion(source).is_none());
    }

    #[test]
    fn test_recursion_counts_substring_calls() {
        let source = "int fib(int n) {\n    return myfib(n);\n}\n";
        let recursion = detect_recursion(source).unwrap();
        assert_eq!(recursion.call_count, 2);
    }

    #[test]
    fn test_critical_exponent() {
        let recursion = Recursion {
            function_name: "f".to_string(),
            call_count: 4,
        };
        assert!((recursion.critical_exponent() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_must_use_low_plus_high() {
        let source = "while (lo < hi) {
    mid = lo + (hi - lo) / 2;
    if (a == b) {
    } else if (a < b) {
    }
}";
        assert!(!is_binary_search(source));
    }

    #[test]
    fn test_idempotent() {
        for source in [BUBBLE_SORT, FIB, BINARY_SEARCH, ADD, ""] {
            assert_eq!(analyze(source), analyze(source));
            assert_eq!(analyze(source).to_text(), analyze(source).to_text());
        }
    }
}
