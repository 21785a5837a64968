//! Instruction payload sent along each chunk.

/// Separates instructions from the text to correct.
pub const TEXT_SEPARATOR: &str = "\n\n---TEXT TO CLEAN---\n\n";

/// Correction ruleset for Romanian translations of Roman law texts.
pub const CLEANING_PROMPT: &str = r#"You are an expert OCR text cleaner for Romanian language historical legal texts.

Clean this OCR text from Gaius' Institutiile (Roman law text in Romanian translation). Fix:

1. **Romanian diacritics errors**:
   - $ → ș (dollar sign misread as ș)
   - à → ă
   - ì → î
   - (; → ț
   - fji, sji, iji, jji → și
   - (!i, (ia → ți, ția

2. **Common OCR character mistakes**:
   - l (lowercase L) vs I (uppercase i) vs 1 (digit)
   - 0 (zero) vs O (letter O)
   - Remove stray punctuation artifacts
   - Fix spacing issues

3. **Romanian word corrections**:
   - dupà → după
   - càtre → către
   - pìnà → până
   - fàrà → fără
   - existà → există
   - trebuìe → trebuie
   - Bucurestii → București
   - Bucurejti → București

4. **Formatting**:
   - Keep paragraph structure
   - Preserve section markers (§)
   - Keep page numbers if they're part of citations
   - Remove standalone page numbers on their own lines
   - Preserve indentation for structure
   - Keep all Latin legal terms unchanged (e.g., "in iure cessio", "ius gentium")

5. **DO NOT change**:
   - Latin phrases and legal terms
   - Citation formats (D, Art., §)
   - Proper names (Gaius, Pomponius, etc.)
   - Roman numerals in titles

Return ONLY the cleaned text, no explanations or comments."#;

/// Build the user message for `text`.
pub fn user_message(instructions: &str, text: &str) -> String {
    let mut msg = String::with_capacity(instructions.len() + TEXT_SEPARATOR.len() + text.len());
    msg.push_str(instructions);
    msg.push_str(TEXT_SEPARATOR);
    msg.push_str(text);
    msg
}
