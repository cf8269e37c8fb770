/// Fixed instruction sent alongside every image. Written in Japanese because
/// the product reviews Japanese writing; the three sub-tasks map onto the
/// required response fields.
pub(crate) const REVIEW_PROMPT: &str = "\
添付された画像を分析し、以下のタスクを実行して、指定されたJSON形式で出力を提供してください。
1. **OCR**: 画像からすべての日本語テキストを抽出します。元のテキストの改行は維持してください。
2. **要約**: 抽出したテキストを、主要なポイントを保持しつつ、元の長さの約30〜50%に要約してください。
3. **フィードバック**: テキストを分析し、建設的なフィードバックを提供してください。
   - **褒めポイント (praisePoints)**: 優れた構成、明確な表現、説得力のある点など、少なくとも2つの肯定的な側面を特定してください。
   - **改善ポイント (improvementPoints)**: 誤字脱字の可能性、より明確な表現、構成の改善案など、2つ以上の改善点を優しく提案してください。提案は前向きな形で表現してください。
";

/// Response-shape constraint: an object with exactly these four required
/// fields, passed to the service as `responseSchema`.
pub(crate) fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "extractedText": {
                "type": "STRING",
                "description": "画像から抽出された全ての日本語テキスト。改行もそのまま含めてください。",
            },
            "summary": {
                "type": "STRING",
                "description": "抽出されたテキストを元の30-50%程度の長さに要約したもの。",
            },
            "praisePoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "文章の良い点や褒めるべき点を2〜3個、箇条書きにしたリスト。",
            },
            "improvementPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "文章をより良くするための改善提案を2〜3個、優しく箇条書きにしたリスト。",
            },
        },
        "required": ["extractedText", "summary", "praisePoints", "improvementPoints"],
    })
}
