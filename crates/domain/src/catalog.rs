//! The toolbox catalog: the closed vocabulary of element tags.
//!
//! Every draggable block the collaborator UI offers is described here with
//! its category and display label. The generator treats this vocabulary as
//! closed but degrades unrecognized tags to a comment, so the catalog is
//! advisory for rendering and authoritative for the UI.

use crate::language::TargetLanguage;

/// Toolbox category a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCategory {
    /// Console output, input and debug calls.
    OutputDebug,
    /// Loops, switch, break and continue.
    ControlFlow,
    /// If variants and the ternary operator.
    Conditionals,
    /// Variables, constants and container declarations.
    VariablesData,
    /// Primitive type declarations.
    PrimitiveTypes,
    /// Math library calls and random numbers.
    MathOperations,
    /// String library calls.
    StringOperations,
    /// Try/catch/throw skeletons.
    ExceptionHandling,
    /// Self-contained helper algorithms.
    UtilityFunctions,
}

impl BlockCategory {
    /// Get the display name for the category.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::OutputDebug => "Output & Debug",
            Self::ControlFlow => "Control Flow",
            Self::Conditionals => "Conditionals",
            Self::VariablesData => "Variables & Data",
            Self::PrimitiveTypes => "Primitive Types",
            Self::MathOperations => "Math & Operations",
            Self::StringOperations => "String Operations",
            Self::ExceptionHandling => "Exception Handling",
            Self::UtilityFunctions => "Utility Functions",
        }
    }
}

/// One entry of the toolbox catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDescriptor {
    /// The element tag stored in `CodeElement::element_type`.
    pub tag: &'static str,
    /// Default display label.
    pub label: &'static str,
    /// Toolbox category.
    pub category: BlockCategory,
}

use BlockCategory::{
    Conditionals, ControlFlow, ExceptionHandling, MathOperations, OutputDebug, PrimitiveTypes,
    StringOperations, UtilityFunctions, VariablesData,
};

const CATALOG: &[BlockDescriptor] = &[
    // Output & Debug
    BlockDescriptor { tag: "console.writeline", label: "Console.WriteLine", category: OutputDebug },
    BlockDescriptor { tag: "console.write", label: "Console.Write", category: OutputDebug },
    BlockDescriptor { tag: "console.readkey", label: "Console.ReadKey", category: OutputDebug },
    BlockDescriptor { tag: "console.readline", label: "Console.ReadLine", category: OutputDebug },
    BlockDescriptor { tag: "debug.print", label: "Debug.Print", category: OutputDebug },
    BlockDescriptor { tag: "trace.write", label: "Trace.Write", category: OutputDebug },
    // Control Flow
    BlockDescriptor { tag: "for", label: "For Loop", category: ControlFlow },
    BlockDescriptor { tag: "foreach", label: "ForEach Loop", category: ControlFlow },
    BlockDescriptor { tag: "while", label: "While Loop", category: ControlFlow },
    BlockDescriptor { tag: "do-while", label: "Do-While Loop", category: ControlFlow },
    BlockDescriptor { tag: "switch", label: "Switch Statement", category: ControlFlow },
    BlockDescriptor { tag: "break", label: "Break", category: ControlFlow },
    BlockDescriptor { tag: "continue", label: "Continue", category: ControlFlow },
    // Conditionals
    BlockDescriptor { tag: "if", label: "If Statement", category: Conditionals },
    BlockDescriptor { tag: "if-else", label: "If-Else", category: Conditionals },
    BlockDescriptor { tag: "if-else-if", label: "If-Else If", category: Conditionals },
    BlockDescriptor { tag: "ternary", label: "Ternary Operator", category: Conditionals },
    // Variables & Data
    BlockDescriptor { tag: "variable", label: "Variable", category: VariablesData },
    BlockDescriptor { tag: "constant", label: "Constant", category: VariablesData },
    BlockDescriptor { tag: "array", label: "Array", category: VariablesData },
    BlockDescriptor { tag: "list", label: "List", category: VariablesData },
    BlockDescriptor { tag: "dictionary", label: "Dictionary", category: VariablesData },
    BlockDescriptor { tag: "return", label: "Return Statement", category: VariablesData },
    // Primitive Types
    BlockDescriptor { tag: "string", label: "String", category: PrimitiveTypes },
    BlockDescriptor { tag: "int", label: "Integer", category: PrimitiveTypes },
    BlockDescriptor { tag: "long", label: "Long", category: PrimitiveTypes },
    BlockDescriptor { tag: "float", label: "Float", category: PrimitiveTypes },
    BlockDescriptor { tag: "double", label: "Double", category: PrimitiveTypes },
    BlockDescriptor { tag: "decimal", label: "Decimal", category: PrimitiveTypes },
    BlockDescriptor { tag: "bool", label: "Boolean", category: PrimitiveTypes },
    BlockDescriptor { tag: "char", label: "Character", category: PrimitiveTypes },
    BlockDescriptor { tag: "byte", label: "Byte", category: PrimitiveTypes },
    BlockDescriptor { tag: "short", label: "Short", category: PrimitiveTypes },
    // Math & Operations
    BlockDescriptor { tag: "math.sqrt", label: "Math.Sqrt", category: MathOperations },
    BlockDescriptor { tag: "math.pow", label: "Math.Pow", category: MathOperations },
    BlockDescriptor { tag: "math.abs", label: "Math.Abs", category: MathOperations },
    BlockDescriptor { tag: "math.min", label: "Math.Min", category: MathOperations },
    BlockDescriptor { tag: "math.max", label: "Math.Max", category: MathOperations },
    BlockDescriptor { tag: "random", label: "Random", category: MathOperations },
    // String Operations
    BlockDescriptor { tag: "string.length", label: "String.Length", category: StringOperations },
    BlockDescriptor { tag: "string.substring", label: "Substring", category: StringOperations },
    BlockDescriptor { tag: "string.split", label: "Split", category: StringOperations },
    BlockDescriptor { tag: "string.replace", label: "Replace", category: StringOperations },
    BlockDescriptor { tag: "string.tolower", label: "ToLower", category: StringOperations },
    BlockDescriptor { tag: "string.toupper", label: "ToUpper", category: StringOperations },
    BlockDescriptor { tag: "string.trim", label: "Trim", category: StringOperations },
    BlockDescriptor { tag: "string.contains", label: "Contains", category: StringOperations },
    // Exception Handling
    BlockDescriptor { tag: "try-catch", label: "Try-Catch", category: ExceptionHandling },
    BlockDescriptor { tag: "try-catch-finally", label: "Try-Catch-Finally", category: ExceptionHandling },
    BlockDescriptor { tag: "throw", label: "Throw Exception", category: ExceptionHandling },
    // Utility Functions
    BlockDescriptor { tag: "util.iseven", label: "Is Even", category: UtilityFunctions },
    BlockDescriptor { tag: "util.isodd", label: "Is Odd", category: UtilityFunctions },
    BlockDescriptor { tag: "util.isprime", label: "Is Prime", category: UtilityFunctions },
    BlockDescriptor { tag: "util.factorial", label: "Factorial", category: UtilityFunctions },
    BlockDescriptor { tag: "util.fibonacci", label: "Fibonacci", category: UtilityFunctions },
    BlockDescriptor { tag: "util.reversestring", label: "Reverse String", category: UtilityFunctions },
    BlockDescriptor { tag: "util.ispalindrome", label: "Is Palindrome", category: UtilityFunctions },
    BlockDescriptor { tag: "util.swap", label: "Swap Values", category: UtilityFunctions },
    BlockDescriptor { tag: "util.tobinary", label: "To Binary", category: UtilityFunctions },
    BlockDescriptor { tag: "util.tohex", label: "To Hex", category: UtilityFunctions },
    BlockDescriptor { tag: "util.tofahrenheit", label: "Celsius to Fahrenheit", category: UtilityFunctions },
    BlockDescriptor { tag: "util.tocelsius", label: "Fahrenheit to Celsius", category: UtilityFunctions },
    BlockDescriptor { tag: "util.isvalidemail", label: "Validate Email", category: UtilityFunctions },
    BlockDescriptor { tag: "util.isvalidpassword", label: "Validate Password", category: UtilityFunctions },
    BlockDescriptor { tag: "util.isvalidurl", label: "Validate URL", category: UtilityFunctions },
    BlockDescriptor { tag: "util.isvaliddate", label: "Validate Date", category: UtilityFunctions },
    BlockDescriptor { tag: "util.isnumeric", label: "Is Numeric", category: UtilityFunctions },
];

/// Element tags whose `children` sequence is meaningful.
const BLOCK_TAGS: &[&str] = &[
    "for", "foreach", "while", "do-while", "switch", "if", "if-else", "if-else-if",
];

/// Get all catalog entries in toolbox order.
#[must_use]
pub const fn all() -> &'static [BlockDescriptor] {
    CATALOG
}

/// Look up a catalog entry by tag.
#[must_use]
pub fn find(tag: &str) -> Option<&'static BlockDescriptor> {
    CATALOG.iter().find(|block| block.tag == tag)
}

/// Whether the tag is part of the closed vocabulary.
#[must_use]
pub fn is_known(tag: &str) -> bool {
    find(tag).is_some()
}

/// Whether the tag is block-structured, i.e. may carry nested children.
#[must_use]
pub fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// Display label for a tag as shown for a specific target language.
///
/// A handful of blocks read differently per language (the toolbox shows
/// `print` instead of `Console.WriteLine` when Python is selected); all
/// others keep their default label. Unknown tags echo the tag itself.
#[must_use]
pub fn label_for<'a>(tag: &'a str, language: TargetLanguage) -> &'a str {
    use TargetLanguage::{CSharp, Java, JavaScript, Python};
    match (tag, language) {
        ("console.writeline", Java) => "System.out.println",
        ("console.writeline", JavaScript) => "console.log",
        ("console.writeline" | "debug.print" | "trace.write", Python) => "print",
        ("console.write", Java) => "System.out.print",
        ("console.write", JavaScript) => "process.stdout.write",
        ("console.write", Python) => "print",
        ("console.readkey" | "console.readline", Java) => "Scanner.nextLine",
        ("console.readkey" | "console.readline", JavaScript) => "prompt",
        ("console.readkey" | "console.readline", Python) => "input",
        ("debug.print", Java) => "System.err.println",
        ("debug.print", JavaScript) => "console.debug",
        ("trace.write", Java) => "System.err.print",
        ("trace.write", JavaScript) => "console.trace",
        ("foreach", Java) => "Enhanced For",
        ("foreach", JavaScript) => "For...of Loop",
        ("foreach", Python) => "For...in Loop",
        ("do-while", Python) => "While True",
        ("switch", Python) => "Match Statement",
        ("if-else-if", Python) => "If-Elif-Else",
        ("ternary", Python) => "Conditional Expression",
        ("variable", JavaScript) => "Let/Const",
        ("constant", Java) => "Final Variable",
        ("constant", JavaScript) => "Const",
        ("array" | "list", Python) => "List",
        ("list", Java) => "ArrayList",
        ("list", JavaScript) => "Array",
        ("dictionary", Java) => "HashMap",
        ("dictionary", JavaScript) => "Object/Map",
        ("try-catch", Python) => "Try-Except",
        ("try-catch-finally", Python) => "Try-Except-Finally",
        ("throw", JavaScript) => "Throw Error",
        ("throw", Python) => "Raise Exception",
        (_, CSharp | Java | JavaScript | Python) => {
            find(tag).map_or(tag, |block| block.label)
        }
    }
}
