//! Utility-function blocks.
//!
//! Utility tags stand for self-contained helper algorithms (factorial,
//! palindrome test, validators). Where they end up depends on the target
//! language:
//!
//! - C# and JavaScript hoist them: every distinct tag used anywhere in the
//!   project is rendered exactly once as a class-level method, in
//!   first-discovery order, and each call site renders a comment noting
//!   the deferred placement.
//! - Java (legacy variant) and Python render the full definition inline at
//!   the point of occurrence, self-contained and not deduplicated.

use codebuilder_domain::{CodeElement, ProjectData};
use indexmap::IndexSet;

use crate::generator::reindent;

/// The fixed utility-function vocabulary.
pub const UTILITY_TAGS: &[&str] = &[
    "util.iseven",
    "util.isodd",
    "util.isprime",
    "util.factorial",
    "util.fibonacci",
    "util.reversestring",
    "util.ispalindrome",
    "util.swap",
    "util.tobinary",
    "util.tohex",
    "util.tofahrenheit",
    "util.tocelsius",
    "util.isvalidemail",
    "util.isvalidpassword",
    "util.isvalidurl",
    "util.isvaliddate",
    "util.isnumeric",
];

/// Whether a tag is a member of the utility-function vocabulary.
#[must_use]
pub fn is_utility(tag: &str) -> bool {
    UTILITY_TAGS.contains(&tag)
}

/// Distinct utility tags used anywhere in the project, in first-discovery
/// order across methods and nested children.
#[must_use]
pub fn collect(project: &ProjectData) -> Vec<&'static str> {
    let mut seen: IndexSet<&'static str> = IndexSet::new();
    for method in &project.methods {
        walk(&method.elements, &mut seen);
    }
    seen.into_iter().collect()
}

fn walk(elements: &[CodeElement], seen: &mut IndexSet<&'static str>) {
    for element in elements {
        if let Some(tag) = UTILITY_TAGS
            .iter()
            .find(|tag| **tag == element.element_type)
        {
            seen.insert(tag);
        }
        walk(&element.children, seen);
    }
}

/// Helper method names per tag: (PascalCase, camelCase, snake_case).
///
/// C# uses the Pascal spelling, Java and JavaScript the camel spelling,
/// Python the snake spelling.
fn names(tag: &str) -> (&'static str, &'static str, &'static str) {
    match tag {
        "util.iseven" => ("IsEven", "isEven", "is_even"),
        "util.isodd" => ("IsOdd", "isOdd", "is_odd"),
        "util.isprime" => ("IsPrime", "isPrime", "is_prime"),
        "util.factorial" => ("Factorial", "factorial", "factorial"),
        "util.fibonacci" => ("Fibonacci", "fibonacci", "fibonacci"),
        "util.reversestring" => ("ReverseString", "reverseString", "reverse_string"),
        "util.ispalindrome" => ("IsPalindrome", "isPalindrome", "is_palindrome"),
        "util.swap" => ("Swap", "swap", "swap"),
        "util.tobinary" => ("ToBinary", "toBinary", "to_binary"),
        "util.tohex" => ("ToHex", "toHex", "to_hex"),
        "util.tofahrenheit" => ("ToFahrenheit", "toFahrenheit", "to_fahrenheit"),
        "util.tocelsius" => ("ToCelsius", "toCelsius", "to_celsius"),
        "util.isvalidemail" => ("IsValidEmail", "isValidEmail", "is_valid_email"),
        "util.isvalidpassword" => ("IsValidPassword", "isValidPassword", "is_valid_password"),
        "util.isvalidurl" => ("IsValidUrl", "isValidUrl", "is_valid_url"),
        "util.isvaliddate" => ("IsValidDate", "isValidDate", "is_valid_date"),
        "util.isnumeric" => ("IsNumeric", "isNumeric", "is_numeric"),
        _ => ("", "", ""),
    }
}

/// PascalCase helper name used by the C# emitter.
#[must_use]
pub fn pascal_name(tag: &str) -> &'static str {
    names(tag).0
}

/// camelCase helper name used by the Java and JavaScript emitters.
#[must_use]
pub fn camel_name(tag: &str) -> &'static str {
    names(tag).1
}

/// snake_case helper name used by the Python emitter.
#[must_use]
pub fn snake_name(tag: &str) -> &'static str {
    names(tag).2
}

/// Class-level C# helper definition, indented to `depth`.
#[must_use]
pub fn csharp_definition(tag: &str, depth: usize) -> String {
    reindent(csharp_template(tag), depth)
}

/// Inline Java helper definition, indented to `depth`.
#[must_use]
pub fn java_definition(tag: &str, depth: usize) -> String {
    reindent(java_template(tag), depth)
}

/// Class-level JavaScript helper definition, indented to `depth`.
#[must_use]
pub fn javascript_definition(tag: &str, depth: usize) -> String {
    reindent(javascript_template(tag), depth)
}

/// Inline Python helper definition, indented to `depth`.
#[must_use]
pub fn python_definition(tag: &str, depth: usize) -> String {
    reindent(python_template(tag), depth)
}

fn csharp_template(tag: &str) -> &'static str {
    match tag {
        "util.iseven" => {
            "private static bool IsEven(int number)\n{\n    return number % 2 == 0;\n}"
        }
        "util.isodd" => {
            "private static bool IsOdd(int number)\n{\n    return number % 2 != 0;\n}"
        }
        "util.isprime" => {
            "private static bool IsPrime(int number)\n{\n    if (number < 2)\n    {\n        return false;\n    }\n    for (int i = 2; i * i <= number; i++)\n    {\n        if (number % i == 0)\n        {\n            return false;\n        }\n    }\n    return true;\n}"
        }
        "util.factorial" => {
            "private static long Factorial(int number)\n{\n    long result = 1;\n    for (int i = 2; i <= number; i++)\n    {\n        result *= i;\n    }\n    return result;\n}"
        }
        "util.fibonacci" => {
            "private static long Fibonacci(int count)\n{\n    long previous = 0;\n    long current = 1;\n    for (int i = 0; i < count; i++)\n    {\n        long next = previous + current;\n        previous = current;\n        current = next;\n    }\n    return previous;\n}"
        }
        "util.reversestring" => {
            "private static string ReverseString(string value)\n{\n    char[] characters = value.ToCharArray();\n    Array.Reverse(characters);\n    return new string(characters);\n}"
        }
        "util.ispalindrome" => {
            "private static bool IsPalindrome(string value)\n{\n    int left = 0;\n    int right = value.Length - 1;\n    while (left < right)\n    {\n        if (value[left] != value[right])\n        {\n            return false;\n        }\n        left++;\n        right--;\n    }\n    return true;\n}"
        }
        "util.swap" => {
            "private static void Swap(ref int first, ref int second)\n{\n    int temp = first;\n    first = second;\n    second = temp;\n}"
        }
        "util.tobinary" => {
            "private static string ToBinary(int number)\n{\n    return Convert.ToString(number, 2);\n}"
        }
        "util.tohex" => {
            "private static string ToHex(int number)\n{\n    return number.ToString(\"X\");\n}"
        }
        "util.tofahrenheit" => {
            "private static double ToFahrenheit(double celsius)\n{\n    return celsius * 9.0 / 5.0 + 32.0;\n}"
        }
        "util.tocelsius" => {
            "private static double ToCelsius(double fahrenheit)\n{\n    return (fahrenheit - 32.0) * 5.0 / 9.0;\n}"
        }
        "util.isvalidemail" => {
            "private static bool IsValidEmail(string value)\n{\n    int atIndex = value.IndexOf('@');\n    return atIndex > 0 && value.IndexOf('.', atIndex) > atIndex + 1;\n}"
        }
        "util.isvalidpassword" => {
            "private static bool IsValidPassword(string value)\n{\n    if (value.Length < 8)\n    {\n        return false;\n    }\n    bool hasDigit = false;\n    bool hasLetter = false;\n    foreach (char c in value)\n    {\n        if (char.IsDigit(c))\n        {\n            hasDigit = true;\n        }\n        if (char.IsLetter(c))\n        {\n            hasLetter = true;\n        }\n    }\n    return hasDigit && hasLetter;\n}"
        }
        "util.isvalidurl" => {
            "private static bool IsValidUrl(string value)\n{\n    return value.StartsWith(\"http://\") || value.StartsWith(\"https://\");\n}"
        }
        "util.isvaliddate" => {
            "private static bool IsValidDate(string value)\n{\n    return DateTime.TryParse(value, out _);\n}"
        }
        "util.isnumeric" => {
            "private static bool IsNumeric(string value)\n{\n    return double.TryParse(value, out _);\n}"
        }
        _ => "",
    }
}

fn java_template(tag: &str) -> &'static str {
    match tag {
        "util.iseven" => {
            "private static boolean isEven(int number) {\n    return number % 2 == 0;\n}"
        }
        "util.isodd" => {
            "private static boolean isOdd(int number) {\n    return number % 2 != 0;\n}"
        }
        "util.isprime" => {
            "private static boolean isPrime(int number) {\n    if (number < 2) {\n        return false;\n    }\n    for (int i = 2; i * i <= number; i++) {\n        if (number % i == 0) {\n            return false;\n        }\n    }\n    return true;\n}"
        }
        "util.factorial" => {
            "private static long factorial(int number) {\n    long result = 1;\n    for (int i = 2; i <= number; i++) {\n        result *= i;\n    }\n    return result;\n}"
        }
        "util.fibonacci" => {
            "private static long fibonacci(int count) {\n    long previous = 0;\n    long current = 1;\n    for (int i = 0; i < count; i++) {\n        long next = previous + current;\n        previous = current;\n        current = next;\n    }\n    return previous;\n}"
        }
        "util.reversestring" => {
            "private static String reverseString(String value) {\n    return new StringBuilder(value).reverse().toString();\n}"
        }
        "util.ispalindrome" => {
            "private static boolean isPalindrome(String value) {\n    int left = 0;\n    int right = value.length() - 1;\n    while (left < right) {\n        if (value.charAt(left) != value.charAt(right)) {\n            return false;\n        }\n        left++;\n        right--;\n    }\n    return true;\n}"
        }
        "util.swap" => {
            "private static void swap(int[] values, int first, int second) {\n    int temp = values[first];\n    values[first] = values[second];\n    values[second] = temp;\n}"
        }
        "util.tobinary" => {
            "private static String toBinary(int number) {\n    return Integer.toBinaryString(number);\n}"
        }
        "util.tohex" => {
            "private static String toHex(int number) {\n    return Integer.toHexString(number);\n}"
        }
        "util.tofahrenheit" => {
            "private static double toFahrenheit(double celsius) {\n    return celsius * 9.0 / 5.0 + 32.0;\n}"
        }
        "util.tocelsius" => {
            "private static double toCelsius(double fahrenheit) {\n    return (fahrenheit - 32.0) * 5.0 / 9.0;\n}"
        }
        "util.isvalidemail" => {
            "private static boolean isValidEmail(String value) {\n    int atIndex = value.indexOf('@');\n    return atIndex > 0 && value.indexOf('.', atIndex) > atIndex + 1;\n}"
        }
        "util.isvalidpassword" => {
            "private static boolean isValidPassword(String value) {\n    if (value.length() < 8) {\n        return false;\n    }\n    boolean hasDigit = false;\n    boolean hasLetter = false;\n    for (char c : value.toCharArray()) {\n        if (Character.isDigit(c)) {\n            hasDigit = true;\n        }\n        if (Character.isLetter(c)) {\n            hasLetter = true;\n        }\n    }\n    return hasDigit && hasLetter;\n}"
        }
        "util.isvalidurl" => {
            "private static boolean isValidUrl(String value) {\n    return value.startsWith(\"http://\") || value.startsWith(\"https://\");\n}"
        }
        "util.isvaliddate" => {
            "private static boolean isValidDate(String value) {\n    try {\n        java.time.LocalDate.parse(value);\n        return true;\n    } catch (Exception error) {\n        return false;\n    }\n}"
        }
        "util.isnumeric" => {
            "private static boolean isNumeric(String value) {\n    try {\n        Double.parseDouble(value);\n        return true;\n    } catch (NumberFormatException error) {\n        return false;\n    }\n}"
        }
        _ => "",
    }
}

fn javascript_template(tag: &str) -> &'static str {
    match tag {
        "util.iseven" => "static isEven(number) {\n    return number % 2 === 0;\n}",
        "util.isodd" => "static isOdd(number) {\n    return number % 2 !== 0;\n}",
        "util.isprime" => {
            "static isPrime(number) {\n    if (number < 2) {\n        return false;\n    }\n    for (let i = 2; i * i <= number; i++) {\n        if (number % i === 0) {\n            return false;\n        }\n    }\n    return true;\n}"
        }
        "util.factorial" => {
            "static factorial(number) {\n    let result = 1;\n    for (let i = 2; i <= number; i++) {\n        result *= i;\n    }\n    return result;\n}"
        }
        "util.fibonacci" => {
            "static fibonacci(count) {\n    let previous = 0;\n    let current = 1;\n    for (let i = 0; i < count; i++) {\n        const next = previous + current;\n        previous = current;\n        current = next;\n    }\n    return previous;\n}"
        }
        "util.reversestring" => {
            "static reverseString(value) {\n    return value.split('').reverse().join('');\n}"
        }
        "util.ispalindrome" => {
            "static isPalindrome(value) {\n    const reversed = value.split('').reverse().join('');\n    return value === reversed;\n}"
        }
        "util.swap" => {
            "static swap(values, first, second) {\n    [values[first], values[second]] = [values[second], values[first]];\n}"
        }
        "util.tobinary" => "static toBinary(number) {\n    return number.toString(2);\n}",
        "util.tohex" => "static toHex(number) {\n    return number.toString(16);\n}",
        "util.tofahrenheit" => {
            "static toFahrenheit(celsius) {\n    return celsius * 9 / 5 + 32;\n}"
        }
        "util.tocelsius" => {
            "static toCelsius(fahrenheit) {\n    return (fahrenheit - 32) * 5 / 9;\n}"
        }
        "util.isvalidemail" => {
            "static isValidEmail(value) {\n    const atIndex = value.indexOf('@');\n    return atIndex > 0 && value.indexOf('.', atIndex) > atIndex + 1;\n}"
        }
        "util.isvalidpassword" => {
            "static isValidPassword(value) {\n    if (value.length < 8) {\n        return false;\n    }\n    return /[0-9]/.test(value) && /[a-zA-Z]/.test(value);\n}"
        }
        "util.isvalidurl" => {
            "static isValidUrl(value) {\n    return value.startsWith('http://') || value.startsWith('https://');\n}"
        }
        "util.isvaliddate" => {
            "static isValidDate(value) {\n    return !Number.isNaN(Date.parse(value));\n}"
        }
        "util.isnumeric" => {
            "static isNumeric(value) {\n    return value.trim() !== '' && !Number.isNaN(Number(value));\n}"
        }
        _ => "",
    }
}

fn python_template(tag: &str) -> &'static str {
    match tag {
        "util.iseven" => "def is_even(number):\n    return number % 2 == 0",
        "util.isodd" => "def is_odd(number):\n    return number % 2 != 0",
        "util.isprime" => {
            "def is_prime(number):\n    if number < 2:\n        return False\n    for i in range(2, int(number ** 0.5) + 1):\n        if number % i == 0:\n            return False\n    return True"
        }
        "util.factorial" => {
            "def factorial(number):\n    result = 1\n    for i in range(2, number + 1):\n        result *= i\n    return result"
        }
        "util.fibonacci" => {
            "def fibonacci(count):\n    previous, current = 0, 1\n    for _ in range(count):\n        previous, current = current, previous + current\n    return previous"
        }
        "util.reversestring" => "def reverse_string(value):\n    return value[::-1]",
        "util.ispalindrome" => "def is_palindrome(value):\n    return value == value[::-1]",
        "util.swap" => {
            "def swap(values, first, second):\n    values[first], values[second] = values[second], values[first]"
        }
        "util.tobinary" => "def to_binary(number):\n    return bin(number)[2:]",
        "util.tohex" => "def to_hex(number):\n    return hex(number)[2:]",
        "util.tofahrenheit" => {
            "def to_fahrenheit(celsius):\n    return celsius * 9.0 / 5.0 + 32.0"
        }
        "util.tocelsius" => {
            "def to_celsius(fahrenheit):\n    return (fahrenheit - 32.0) * 5.0 / 9.0"
        }
        "util.isvalidemail" => {
            "def is_valid_email(value):\n    at_index = value.find(\"@\")\n    return at_index > 0 and value.find(\".\", at_index) > at_index + 1"
        }
        "util.isvalidpassword" => {
            "def is_valid_password(value):\n    if len(value) < 8:\n        return False\n    has_digit = any(c.isdigit() for c in value)\n    has_letter = any(c.isalpha() for c in value)\n    return has_digit and has_letter"
        }
        "util.isvalidurl" => {
            "def is_valid_url(value):\n    return value.startswith((\"http://\", \"https://\"))"
        }
        "util.isvaliddate" => {
            "def is_valid_date(value):\n    try:\n        datetime.datetime.fromisoformat(value)\n        return True\n    except ValueError:\n        return False"
        }
        "util.isnumeric" => {
            "def is_numeric(value):\n    try:\n        float(value)\n        return True\n    except ValueError:\n        return False"
        }
        _ => "",
    }
}
