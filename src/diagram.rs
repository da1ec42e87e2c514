//! Keyword-driven architecture diagrams.
//!
//! Each summary embeds a mermaid flowchart: two universal nodes plus an
//! optional branch selected by substring-matching the folder name against a
//! priority-ordered keyword table. The table is a plain data structure so
//! callers can supply their own instead of the built-in one.

use serde::{Deserialize, Serialize};

/// One keyword and the diagram lines it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramBranch {
    /// Substring matched against the folder name.
    pub keyword: String,
    /// Mermaid edge lines appended under the universal nodes.
    pub lines: Vec<String>,
}

impl DiagramBranch {
    pub fn new(keyword: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            keyword: keyword.into(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Ordered branch table; the first keyword found in the folder name wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramMap {
    pub branches: Vec<DiagramBranch>,
}

impl Default for DiagramMap {
    fn default() -> Self {
        Self {
            branches: vec![
                DiagramBranch::new(
                    "Text_generation",
                    &[
                        "B --> C1[Invoke API]",
                        "B --> C2[Converse API]",
                        "C2 --> D1[Text Generation]",
                        "C2 --> D2[Multi-turn Conversations]",
                        "C2 --> D3[Function Calling]",
                    ],
                ),
                DiagramBranch::new(
                    "Knowledge_Bases",
                    &[
                        "B --> C1[Knowledge Base]",
                        "C1 --> D1[Document Ingestion]",
                        "C1 --> D2[Retrieval]",
                        "B --> C2[RAG]",
                        "C2 --> D3[Query Processing]",
                        "D2 --> D3",
                    ],
                ),
                DiagramBranch::new(
                    "Model_customization",
                    &[
                        "B --> C1[Fine-tuning]",
                        "B --> C2[Continued Pre-training]",
                        "C1 --> D1[Custom Models]",
                    ],
                ),
                DiagramBranch::new(
                    "Image",
                    &[
                        "B --> C1[Image Generation]",
                        "B --> C2[Image Editing]",
                        "B --> C3[Multimodal Understanding]",
                    ],
                ),
                DiagramBranch::new(
                    "Agents",
                    &[
                        "B --> C1[Agent Creation]",
                        "B --> C2[Knowledge Base Association]",
                        "B --> C3[Agent Invocation]",
                        "C1 --> D1[Action Groups]",
                        "C2 --> D2[Document Retrieval]",
                    ],
                ),
                DiagramBranch::new(
                    "OpenSource",
                    &[
                        "B --> C1[LangChain Integration]",
                        "B --> C2[LangGraph Integration]",
                        "B --> C3[CrewAI Integration]",
                    ],
                ),
                DiagramBranch::new(
                    "Cross_Region",
                    &[
                        "B --> C1[Cross-Region Inference]",
                        "C1 --> D1[Higher Throughput]",
                        "C1 --> D2[Traffic Management]",
                    ],
                ),
            ],
        }
    }
}

impl DiagramMap {
    /// Renders the fenced mermaid block for a folder name.
    ///
    /// Folder names matching no keyword get the two universal nodes only.
    pub fn render(&self, folder_name: &str) -> String {
        let mut out = String::from(
            "```mermaid\nflowchart TD\n    A[Client Application] --> B[Foundation Model Service]\n",
        );
        if let Some(branch) = self
            .branches
            .iter()
            .find(|b| folder_name.contains(b.keyword.as_str()))
        {
            for line in &branch.lines {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push_str("```\n");
        out
    }
}
