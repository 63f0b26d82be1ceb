//! RFP Context - 草稿模板
//!
//! 固定模板填充，无外部调用，结果完全确定

/// 缺省 scope / budget 的占位文本
pub const NOT_SPECIFIED: &str = "(not specified)";

/// RFP 需求简述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfpBrief {
    pub goal: String,
    pub scope: Option<String>,
    pub budget: Option<String>,
}

/// 生成 RFP 草稿
pub fn build_rfp_draft(brief: &RfpBrief) -> String {
    format!(
        "RFP Draft\n\
         \n\
         Goal:\n\
         {goal}\n\
         \n\
         Scope:\n\
         {scope}\n\
         \n\
         Estimated Budget:\n\
         {budget}\n\
         \n\
         Evaluation Criteria:\n\
         1. Technical fit (40)\n\
         2. Delivery timeline (20)\n\
         3. Cost (20)\n\
         4. Support & SLA (10)\n\
         5. Compliance & Security (10)\n\
         \n\
         Submission Instructions:\n\
         Provide company profile, references, proposed approach, cost breakdown, and timeline.",
        goal = brief.goal,
        scope = or_placeholder(brief.scope.as_deref()),
        budget = or_placeholder(brief.budget.as_deref()),
    )
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_SPECIFIED,
    }
}
