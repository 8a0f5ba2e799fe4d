/// Number of columns that fit a container `measured_width` wide, never fewer than one.
///
/// A zero `column_width` is treated as a single column.
pub fn span_count(measured_width: u32, column_width: u32) -> usize {
    if column_width == 0 {
        return 1;
    }
    ((measured_width / column_width) as usize).max(1)
}
