//! Fixed vocabulary tables.
//!
//! These lists are configuration data: membership changes what becomes
//! clickable, so edit them deliberately and keep the two sets disjoint.

use crate::lexicon::{Affix, PatternRule};

use phf::{Set, phf_set};

/// Common English and lay medical words that never become clickable.
pub static EXCLUDED: Set<&'static str> = phf_set! {
    // general English
    "about", "after", "again", "against", "although", "another", "anything",
    "available", "because", "before", "between", "certain", "different",
    "during", "especially", "everything", "example", "general", "generally",
    "however", "important", "including", "information", "instead", "overall",
    "particularly", "possible", "potential", "potentially", "regarding",
    "several", "should", "significant", "significantly", "something",
    "specific", "through", "together", "typically", "usually", "whether",
    "without", "academia", "photogenic", "metamorphosis",
    // lay medical vocabulary
    "allergic", "allergies", "bleeding", "breastfeeding", "children",
    "condition", "conditions", "consider", "consideration", "considerations",
    "consult", "consulting", "contraceptive", "contraceptives", "decrease",
    "decreased", "diagnosis", "dizziness", "dosage", "dosages", "drowsiness",
    "effective", "effects", "elderly", "fatigue", "headache", "headaches",
    "healthcare", "hormonal", "hormone", "hormones", "hypnosis", "increase",
    "increased", "infection", "infections", "interaction", "interactions",
    "intoxicated", "intoxication", "medication", "medications", "medicine",
    "medicines", "menopause", "menstrual", "monitor", "monitoring", "patient",
    "patients", "pharmacist", "physician", "pregnancy", "pregnant",
    "prescription", "pressure", "prognosis", "provider", "providers",
    "recommend", "recommendation", "recommendations", "recommended",
    "stomach", "supplement", "supplements", "symptom", "symptoms", "therapy",
    "therapies", "treatment", "treatments", "vitamin", "vitamins", "women",
};

/// Technical medical and pharmacological terms that are always clickable
/// once they clear the minimum length.
pub static INCLUDED: Set<&'static str> = phf_set! {
    "agranulocytosis", "anaphylaxis", "angioedema", "anticoagulant",
    "anticoagulants", "antiplatelet", "arrhythmia", "bioavailability",
    "bradycardia", "cardiotoxicity", "contraindicated", "contraindication",
    "contraindications", "corticosteroid", "corticosteroids",
    "cyclooxygenase", "cytochrome", "embolism", "endometriosis", "estrogen",
    "fetotoxic", "gastrointestinal", "glucuronidation", "hemorrhage",
    "hepatotoxicity", "hyperkalemia", "hypersensitivity", "hypertension",
    "hypoglycemia", "hyponatremia", "hypotension", "inhibitor", "inhibitors",
    "lactation", "metabolite", "metabolites", "neonatal", "nephrotoxicity",
    "nonsteroidal", "osteoporosis", "ototoxicity", "pancreatitis",
    "pharmacodynamics", "photosensitivity", "placental", "progesterone",
    "progestin", "prostaglandin", "prostaglandins", "rhabdomyolysis",
    "serotonergic", "serotonin", "tachycardia", "teratogen", "teratogenic",
    "thrombocytopenia", "thromboembolism", "ulceration",
};

/// Fallback rules, tried only for words not listed in either set.
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule::new(Affix::Suffix, "itis"),
    PatternRule::new(Affix::Suffix, "osis"),
    PatternRule::new(Affix::Suffix, "emia"),
    PatternRule::new(Affix::Suffix, "pathy"),
    PatternRule::new(Affix::Suffix, "genic"),
    PatternRule::new(Affix::Suffix, "penia"),
    PatternRule::new(Affix::Suffix, "uria"),
    PatternRule::new(Affix::Suffix, "oma"),
    PatternRule::new(Affix::Suffix, "plasty"),
    PatternRule::new(Affix::Suffix, "ectomy"),
    PatternRule::new(Affix::Suffix, "scopy"),
    PatternRule::new(Affix::Suffix, "phagia"),
    PatternRule::new(Affix::Suffix, "kinetics"),
    PatternRule::new(Affix::Suffix, "algia"),
    PatternRule::new(Affix::Suffix, "megaly"),
    PatternRule::new(Affix::Suffix, "plasia"),
    PatternRule::new(Affix::Suffix, "trophy"),
    PatternRule::new(Affix::Prefix, "hepato"),
    PatternRule::new(Affix::Prefix, "nephro"),
    PatternRule::new(Affix::Prefix, "cardio"),
    PatternRule::new(Affix::Prefix, "neuro"),
    PatternRule::new(Affix::Prefix, "cyto"),
    PatternRule::new(Affix::Prefix, "gastro"),
    PatternRule::new(Affix::Prefix, "hemato"),
    PatternRule::new(Affix::Infix, "toxic"),
];
