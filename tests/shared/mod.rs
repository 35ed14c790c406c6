pub mod test_math_util;
