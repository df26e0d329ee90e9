use std::fmt;

use crate::format::format_employee;

/// One row of the `Employee` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub empno: i32,
    pub ename: String,
    pub job_title: String,
    /// EMPNO of the row this one duplicates, if any.
    pub duplicate_empno: Option<i32>,
}

impl Employee {
    pub fn new(empno: i32, ename: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            empno,
            ename: ename.into(),
            job_title: job_title.into(),
            duplicate_empno: None,
        }
    }

    /// Build the linked duplicate of this row: EMPNO + 1, same name and
    /// job title, pointing back at this row.
    ///
    /// Returns `None` when EMPNO + 1 overflows.
    pub fn duplicate(&self) -> Option<Self> {
        let empno = self.empno.checked_add(1)?;
        Some(Self {
            empno,
            ename: self.ename.clone(),
            job_title: self.job_title.clone(),
            duplicate_empno: Some(self.empno),
        })
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_employee(self.empno, &self.ename, &self.job_title))
    }
}
