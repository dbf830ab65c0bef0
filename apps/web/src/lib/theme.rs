//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the application.

pub struct Theme;

impl Theme {
    /// Card container wrapping tables and detail panels.
    pub const CARD: &'static str = "overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg";

    /// Column header cell.
    pub const TABLE_HEAD: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Body row that reacts to hover.
    pub const ROW: &'static str = "hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors";

    /// Standard icon button that transitions to the accent color on hover.
    pub const ICON_BUTTON: &'static str = "material-symbols-outlined text-green-600 hover:text-green-800 dark:text-green-400 dark:hover:text-green-300 cursor-pointer transition-colors";

    /// Pagination control, active page variant is layered on top.
    pub const PAGE_LINK: &'static str = "inline-flex items-center justify-center min-w-9 h-9 px-3 text-sm font-medium rounded-lg text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 cursor-pointer transition-colors";

    /// Border and weight applied to the current page.
    pub const PAGE_LINK_ACTIVE: &'static str = "border border-gray-300 dark:border-gray-500 font-semibold";
}
