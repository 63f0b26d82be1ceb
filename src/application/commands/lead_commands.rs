//! Lead Commands

/// 邮件订阅命令
#[derive(Debug, Clone)]
pub struct Subscribe {
    pub email: String,
}

/// 提交联系留言命令
#[derive(Debug, Clone)]
pub struct SubmitContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// 预约演示命令
#[derive(Debug, Clone)]
pub struct RequestDemo {
    pub name: String,
    pub email: String,
    pub company: String,
    pub size: Option<String>,
    pub message: Option<String>,
}
