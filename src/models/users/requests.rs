/// 创建用户（仅用于初始化数据）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub student_number: Option<String>,
}
