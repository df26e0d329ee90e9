//! One-line rendering of Employee rows.

/// Render a row as `EMPNO, ENAME, JOB_TITLE`.
pub fn format_employee(empno: i32, ename: &str, job_title: &str) -> String {
    format!("{}, {}, {}", empno, ename, job_title)
}
