/// Error codes with category prefix
///
/// Categories:
/// - NET: Network connectivity errors
/// - REG: Registry responses
/// - MAN: Project manifest (package.json)
/// - CMD: External command execution
/// - SCF: Scaffolding tool
/// - IO: File system operations
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network errors (NET001-NET099)
    /// Connection failed
    Net001,

    // Registry errors (REG001-REG099)
    /// Non-success status
    Reg001,
    /// Malformed JSON body
    Reg002,
    /// Invalid registry base URL
    Reg003,

    // Manifest errors (MAN001-MAN099)
    /// package.json could not be parsed
    Man001,

    // Command errors (CMD001-CMD099)
    /// Command exited unsuccessfully
    Cmd001,
    /// Command could not be started
    Cmd002,

    // Scaffold errors (SCF001-SCF099)
    /// Scaffolding tool failed
    Scf001,

    // I/O errors (IO001-IO099)
    /// File system operation failed
    Io001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "NET001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "NET001",
            ErrorCode::Reg001 => "REG001",
            ErrorCode::Reg002 => "REG002",
            ErrorCode::Reg003 => "REG003",
            ErrorCode::Man001 => "MAN001",
            ErrorCode::Cmd001 => "CMD001",
            ErrorCode::Cmd002 => "CMD002",
            ErrorCode::Scf001 => "SCF001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "Unable to establish network connection to the registry",
            ErrorCode::Reg001 => "The registry responded with an error status",
            ErrorCode::Reg002 => "The registry response was not valid JSON",
            ErrorCode::Reg003 => "The configured registry URL is not a valid URL",
            ErrorCode::Man001 => "The project's package.json could not be parsed",
            ErrorCode::Cmd001 => "An external command exited with a failure status",
            ErrorCode::Cmd002 => "An external command could not be started",
            ErrorCode::Scf001 => "The scaffolding tool failed to add the component",
            ErrorCode::Io001 => "A file system operation failed",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Net001 => "1. Check your internet connection\n2. Verify DEVCN_UI_REGISTRY_URL if you set it\n3. Try again later if the registry is down",
            ErrorCode::Reg001 => "1. Verify the component name is correct\n2. Use 'devcn-ui list' to see available components",
            ErrorCode::Reg002 => "1. Verify DEVCN_UI_REGISTRY_URL points to a devcn-ui registry\n2. Try again later",
            ErrorCode::Reg003 => "1. Set DEVCN_UI_REGISTRY_URL to an absolute http(s) URL\n2. Unset it to use the default registry",
            ErrorCode::Man001 => "1. Check package.json for syntax errors\n2. Run your package manager to validate it",
            ErrorCode::Cmd001 => "1. Re-run the printed command manually to see its output\n2. Check that your package manager works in this project",
            ErrorCode::Cmd002 => "1. Ensure Node.js and npx are installed\n2. Check that the command is on your PATH",
            ErrorCode::Scf001 => "1. Run 'npx shadcn@latest init' in your project first\n2. Re-run the add command with --verbose",
            ErrorCode::Io001 => "1. Check file/directory permissions\n2. Verify the project directory exists",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with debug logs (--verbose)",
        }
    }
}
