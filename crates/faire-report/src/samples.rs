use faire_model::{Result, SampleRecord};

use crate::common::{
    document_writer, end, finish_document, start, start_record, write_attribute_list,
    write_declaration, write_text_element,
};

/// Builds the `SAMPLE_SET` document, one `SAMPLE` per record in input order.
pub fn sample_set_xml(records: &[SampleRecord], center_name: &str) -> Result<String> {
    let mut xml = document_writer();
    write_declaration(&mut xml)?;
    start(&mut xml, "SAMPLE_SET")?;
    for record in records {
        start_record(&mut xml, "SAMPLE", &record.alias, center_name)?;
        start(&mut xml, "SAMPLE_NAME")?;
        write_text_element(&mut xml, "TAXON_ID", &record.taxon_id)?;
        end(&mut xml, "SAMPLE_NAME")?;
        write_attribute_list(
            &mut xml,
            "SAMPLE_ATTRIBUTES",
            "SAMPLE_ATTRIBUTE",
            &record.attributes,
        )?;
        end(&mut xml, "SAMPLE")?;
    }
    end(&mut xml, "SAMPLE_SET")?;
    finish_document(xml)
}
