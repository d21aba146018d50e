use serde::Serialize;

pub const FALLBACK_TIP: &str = "Descarte adequadamente conforme as normas locais.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Plastico,
    Papel,
    Vidro,
    Metal,
    Organico,
}

impl WasteCategory {
    /// Model output index `i` corresponds to `ALL[i]`.
    pub const ALL: [WasteCategory; 5] = [
        WasteCategory::Plastico,
        WasteCategory::Papel,
        WasteCategory::Vidro,
        WasteCategory::Metal,
        WasteCategory::Organico,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WasteCategory::Plastico => "plastico",
            WasteCategory::Papel => "papel",
            WasteCategory::Vidro => "vidro",
            WasteCategory::Metal => "metal",
            WasteCategory::Organico => "organico",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn tip(&self) -> &'static str {
        match self {
            WasteCategory::Plastico => {
                "Lave o recipiente antes do descarte. Remova tampas e rótulos quando possível."
            }
            WasteCategory::Papel => {
                "Certifique-se de que o papel está limpo e seco. Papéis molhados ou sujos vão no lixo comum."
            }
            WasteCategory::Vidro => {
                "Remova tampas e rótulos. Cuidado com vidros quebrados - embale adequadamente."
            }
            WasteCategory::Metal => "Lave latas e recipientes. Remova rótulos quando possível.",
            WasteCategory::Organico => {
                "Ideal para compostagem. Evite misturar com outros tipos de resíduo."
            }
        }
    }

    pub fn recycling_locations(&self) -> String {
        format!("Encontre pontos de coleta próximos para {}", self.label())
    }
}

pub fn tip_for_label(label: &str) -> &'static str {
    WasteCategory::from_label(label)
        .map(|category| category.tip())
        .unwrap_or(FALLBACK_TIP)
}

pub fn available_labels() -> Vec<&'static str> {
    WasteCategory::ALL.iter().map(|category| category.label()).collect()
}
