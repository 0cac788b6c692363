// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_answer(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## 第{section}部分 **经营概览**\n\n"));
        content.push_str(
            "本周营收同比 +12.5%，【华东区】贡献最大，Nora 提醒关注 -3% 的客单价。\n\n",
        );
        content.push_str("> 💡 建议：周末提前备货\n\n");
        content.push_str("| 门店 | 营收 | 环比 |\n|---|---:|---:|\n");
        for row in 0..5 {
            content.push_str(&format!("| 门店{row} | {}万 | +{row}% |\n", 100 + row));
        }
        content.push('\n');
        content.push_str("1. 优化排班\n   - 午市增加一人\n2. 调整菜单\n\n");
        content.push_str("- [x] 完成周报\n- [ ] 复盘会议\n\n");
        content.push_str("步骤1：拉取数据\n步骤2：清洗并汇总\n\n");
        content.push_str(&generate_chart_fence(3));
        content.push_str("\n---\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_chart_fence(points: usize) -> String {
    format!("```chart\n{}\n```\n", generate_loose_chart(points))
}

/// A bar chart payload with bare keys, `+` numbers and a trailing comma.
#[allow(dead_code)]
pub fn generate_loose_chart(points: usize) -> String {
    let data: Vec<String> = (0..points)
        .map(|i| format!("{{name: \"门店{i}\", value: +{i}.5}}"))
        .collect();
    format!("{{type: \"bar\", title: \"营收\", data: [{},]}}", data.join(", "))
}

#[allow(dead_code)]
pub fn generate_inline_fragment(repeats: usize) -> String {
    "**重点** 同比 ~15% 见[报告](https://example.com) 由【可视化小王】整理，".repeat(repeats)
}
