// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_traits::Zero;
use std::cmp::Ordering;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn new<T: PartialOrd + Zero>(v: &T) -> Option<Sign> {
        match v.partial_cmp(&Zero::zero()) {
            Some(Ordering::Less) => Some(Sign::Negative),
            Some(Ordering::Greater) => Some(Sign::Positive),
            _ => None,
        }
    }
    /// text joining a term of this sign to the terms before it
    pub fn separator(self) -> &'static str {
        match self {
            Sign::Negative => " - ",
            Sign::Positive => " + ",
        }
    }
}

/// inserts `,` between every group of three digits counted from the right
pub fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut retval = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (len - index) % 3 == 0 {
            retval.push(',');
        }
        retval.push(ch);
    }
    retval
}
