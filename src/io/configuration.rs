//! Input format constants, output words and process exit codes

/// Byte-order marker tolerated at the start of the first input line
pub const UTF8_BOM: char = '\u{feff}';

/// Separator between the two integers on dimension and inventory lines
pub const TOKEN_SEPARATOR: char = ' ';

/// Smallest accepted wall width or height
pub const MIN_WALL_DIMENSION: i32 = 1;

/// Shortest brick length that may appear in the inventory
pub const MIN_BRICK_LENGTH: i32 = 1;
/// Longest brick length that may appear in the inventory
pub const MAX_BRICK_LENGTH: i32 = 8;

/// Smallest accepted number of bricks of one length
pub const MIN_BRICK_COUNT: i32 = 1;

// The inventory must declare at least one sort, even for walls with nothing to fill
/// Smallest accepted number of distinct brick lengths
pub const MIN_COUNT_OF_BRICKS_SORTS: i32 = 1;

/// Shape character for a cell that needs a brick
pub const CELL_NEEDS_BRICK: char = '1';
/// Shape character for a cell that stays empty
pub const CELL_EMPTY: char = '0';
/// Rendering character for a cell covered by a placed brick
pub const CELL_FILLED: char = '#';

/// Printed when the wall can be built
pub const VERDICT_YES: &str = "yes";
/// Printed when the wall cannot be built
pub const VERDICT_NO: &str = "no";

/// Prefix of the single line printed for any failed run
pub const ERROR_PREFIX: &str = "ERROR:";

// Exit codes, one per error kind. Any verdict exits with zero.
/// No input path was given
pub const EXIT_MISSING_ARGUMENT: u8 = 2;
/// Input path does not name a readable file
pub const EXIT_FILE_NOT_FOUND: u8 = 3;
/// Reading the input failed
pub const EXIT_IO_FAILURE: u8 = 4;
/// Input violates the wall description format
pub const EXIT_MALFORMED_INPUT: u8 = 5;
/// Two inventory lines declare the same brick length
pub const EXIT_DUPLICATE_BRICK_LENGTH: u8 = 6;
/// More inventory lines than declared
pub const EXIT_TOO_MANY_INVENTORY_LINES: u8 = 7;
