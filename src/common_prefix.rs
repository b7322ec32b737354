/// Length of the longest shared leading run of `left` and `right`, in units.
/// O(min(left.len(), right.len())).
pub fn common_prefix_len<U: PartialEq>(left: &[U], right: &[U]) -> usize {
    left.iter()
        .zip(right)
        // Stop at the first unit difference...
        .position(|(l, r)| l != r)
        // ...or take the whole shorter sequence, if no difference was found.
        .unwrap_or_else(|| left.len().min(right.len()))
}

#[derive(Debug, PartialEq, Eq)]
pub struct LcpResult<'a, U> {
    pub common_prefix: &'a [U],
    pub left_rest: &'a [U],
    pub right_rest: &'a [U],
}

/// Splits both sequences at the end of their longest common prefix.
pub fn longest_common_prefix<'a, U: PartialEq>(left: &'a [U], right: &'a [U]) -> LcpResult<'a, U> {
    let len = common_prefix_len(left, right);
    let (common_prefix, left_rest) = left.split_at(len);
    LcpResult {
        common_prefix,
        left_rest,
        right_rest: &right[len..],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn prefix_len() {
        assert_eq!(common_prefix_len(&chars("ㄱㄴ"), &chars("ㄱ")), 1);
        assert_eq!(common_prefix_len(&chars("ㄱ"), &chars("ㄱㄴ")), 1, "symmetric");
        assert_eq!(common_prefix_len(&chars("ㄴㅏ ㅂㅣ"), &chars("ㄴㅏ ㅂㅏㅇ")), 4, "space is a unit");
        assert_eq!(common_prefix_len(&chars("foo"), &chars("bar")), 0, "differ at first unit");
        assert_eq!(common_prefix_len::<char>(&[], &[]), 0, "empty sequences");
        assert_eq!(common_prefix_len(&chars("foo"), &chars("foo")), 3, "equal sequences");
    }

    #[test]
    fn split() {
        let (left, right) = (chars("foobar"), chars("foo"));
        assert_eq!(longest_common_prefix(&left, &right), LcpResult {
            common_prefix: &chars("foo")[..],
            left_rest: &chars("bar")[..],
            right_rest: &chars("")[..],
        }, "right is prefix of left");

        let (left, right) = (chars("foo"), chars("bar"));
        assert_eq!(longest_common_prefix(&left, &right), LcpResult {
            common_prefix: &chars("")[..],
            left_rest: &chars("foo")[..],
            right_rest: &chars("bar")[..],
        }, "no common prefix");

        let left = vec!["src/".to_string(), "main".to_string(), ".rs".to_string()];
        let right = vec!["src/".to_string(), "lib".to_string(), ".rs".to_string()];
        let result = longest_common_prefix(&left, &right);
        assert_eq!(result.common_prefix, &left[..1], "multi-char units");
        assert_eq!(result.right_rest.len(), 2);
    }
}
