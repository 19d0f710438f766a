//! # 定长记录访问器
//!
//! WAVECAR 按固定长度记录组织：记录 i 始于字节偏移 i × 记录长度。
//! 记录长度本身由记录 0 的第一个字段给出。本模块在 `Read + Seek`
//! 流上提供按记录寻址的类型化标量读取，所有上层组件只通过它访问
//! 文件位置。
//!
//! 所有头部字段以小端 64 位浮点编码（整数字段也是），平面波系数
//! 为成对的小端 32 位浮点（复数实部/虚部）。任何越过记录边界或
//! 流末尾的读取都报告为格式错误。
//!
//! ## 依赖关系
//! - 被 `wavecar/decoder.rs` 使用
//! - 使用 `byteorder` 做小端标量解码

use crate::error::{Result, WavekitError};
use byteorder::{LittleEndian, ReadBytesExt};
use num_complex::Complex32;
use std::io::{ErrorKind, Read, Seek, SeekFrom};

/// f64 标量的字节宽度
const SCALAR_BYTES: u64 = 8;

/// 记录 0 必须容纳的最小字节数（3 个 f64 字段）
const MIN_RECORD_LENGTH: u64 = 24;

/// 读取记录 0 的首字段，发现记录长度
///
/// 记录长度字段自身也是 f64 编码的整数值，要求能容纳记录 0 的
/// 三个头字段。
pub fn read_record_length<R: Read + Seek>(stream: &mut R) -> Result<u64> {
    stream.seek(SeekFrom::Start(0))?;

    let raw = stream
        .read_f64::<LittleEndian>()
        .map_err(|e| map_read_error(e, 0))?;

    let length = exact_integer(raw, "record_length", 0)?;
    if (length as u64) < MIN_RECORD_LENGTH {
        return Err(WavekitError::FieldOutOfRange {
            record: 0,
            field: "record_length",
            value: raw,
        });
    }

    Ok(length as u64)
}

/// 定长记录游标
///
/// 持有外部流的可变借用；流的打开与关闭由调用方负责。
pub struct RecordCursor<'a, R: Read + Seek> {
    stream: &'a mut R,
    record_length: u64,
    record: u64,
    offset: u64,
}

impl<'a, R: Read + Seek> RecordCursor<'a, R> {
    /// 以给定记录长度创建游标，初始定位在记录 0 开头
    pub fn new(stream: &'a mut R, record_length: u64) -> Result<Self> {
        let mut cursor = RecordCursor {
            stream,
            record_length,
            record: 0,
            offset: 0,
        };
        cursor.seek_to(0)?;
        Ok(cursor)
    }

    /// 当前记录下标（错误上下文用）
    pub fn record(&self) -> u64 {
        self.record
    }

    /// 定位到第 `record` 条记录的开头
    pub fn seek_to(&mut self, record: u64) -> Result<()> {
        self.stream
            .seek(SeekFrom::Start(record * self.record_length))?;
        self.record = record;
        self.offset = 0;
        Ok(())
    }

    /// 读取一个 f64 标量
    pub fn read_f64(&mut self) -> Result<f64> {
        self.reserve(SCALAR_BYTES)?;
        let value = self
            .stream
            .read_f64::<LittleEndian>()
            .map_err(|e| map_read_error(e, self.record))?;
        self.offset += SCALAR_BYTES;
        Ok(value)
    }

    /// 读取一个 f64 编码的非负整数字段
    ///
    /// 带小数残差的值按格式错误拒绝，绝不静默截断。
    pub fn read_usize(&mut self, field: &'static str) -> Result<usize> {
        let record = self.record;
        let raw = self.read_f64()?;
        exact_integer(raw, field, record)
    }

    /// 跳过一个 f64 宽度的空位
    pub fn skip_f64(&mut self) -> Result<()> {
        self.reserve(SCALAR_BYTES)?;
        self.stream.seek(SeekFrom::Current(SCALAR_BYTES as i64))?;
        self.offset += SCALAR_BYTES;
        Ok(())
    }

    /// 读取一个单精度复数系数（实部、虚部各 4 字节）
    pub fn read_complex32(&mut self) -> Result<Complex32> {
        self.reserve(SCALAR_BYTES)?;
        let re = self
            .stream
            .read_f32::<LittleEndian>()
            .map_err(|e| map_read_error(e, self.record))?;
        let im = self
            .stream
            .read_f32::<LittleEndian>()
            .map_err(|e| map_read_error(e, self.record))?;
        self.offset += SCALAR_BYTES;
        Ok(Complex32::new(re, im))
    }

    /// 检查本次读取不越过记录边界
    fn reserve(&self, bytes: u64) -> Result<()> {
        if self.offset + bytes > self.record_length {
            return Err(WavekitError::RecordOverrun {
                record: self.record,
                offset: self.offset,
                requested: bytes,
                record_length: self.record_length,
            });
        }
        Ok(())
    }
}

/// 校验 f64 字段为精确的非负整数
fn exact_integer(value: f64, field: &'static str, record: u64) -> Result<usize> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(WavekitError::NonIntegralField {
            record,
            field,
            value,
        });
    }
    if value < 0.0 || value > u32::MAX as f64 {
        return Err(WavekitError::FieldOutOfRange {
            record,
            field,
            value,
        });
    }
    Ok(value as usize)
}

fn map_read_error(e: std::io::Error, record: u64) -> WavekitError {
    if e.kind() == ErrorKind::UnexpectedEof {
        WavekitError::TruncatedStream { record }
    } else {
        WavekitError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stream_of(values: &[f64]) -> Cursor<Vec<u8>> {
        let mut bytes = Vec::new();
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        Cursor::new(bytes)
    }

    #[test]
    fn test_read_record_length() {
        let mut stream = stream_of(&[96.0, 1.0, 45200.0]);
        assert_eq!(read_record_length(&mut stream).unwrap(), 96);
    }

    #[test]
    fn test_record_length_must_be_integral() {
        let mut stream = stream_of(&[96.5, 1.0, 45200.0]);
        match read_record_length(&mut stream) {
            Err(WavekitError::NonIntegralField { field, .. }) => {
                assert_eq!(field, "record_length");
            }
            other => panic!("expected NonIntegralField, got {:?}", other),
        }
    }

    #[test]
    fn test_record_length_too_small() {
        let mut stream = stream_of(&[8.0, 1.0, 45200.0]);
        assert!(matches!(
            read_record_length(&mut stream),
            Err(WavekitError::FieldOutOfRange { .. })
        ));
    }

    #[test]
    fn test_typed_reads_and_seek() {
        // 两条 24 字节记录
        let mut stream = stream_of(&[24.0, 2.0, 45200.0, 7.0, -1.5, 0.0]);
        let mut cursor = RecordCursor::new(&mut stream, 24).unwrap();

        assert_eq!(cursor.read_usize("record_length").unwrap(), 24);
        assert_eq!(cursor.read_usize("spin_count").unwrap(), 2);
        assert!((cursor.read_f64().unwrap() - 45200.0).abs() < 1e-12);

        cursor.seek_to(1).unwrap();
        assert_eq!(cursor.read_usize("n").unwrap(), 7);
        assert!((cursor.read_f64().unwrap() - (-1.5)).abs() < 1e-12);
    }

    #[test]
    fn test_skip_gap() {
        let mut stream = stream_of(&[1.0, 2.0, 3.0]);
        let mut cursor = RecordCursor::new(&mut stream, 24).unwrap();

        cursor.read_f64().unwrap();
        cursor.skip_f64().unwrap();
        assert!((cursor.read_f64().unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_record_boundary_enforced() {
        let mut stream = stream_of(&[1.0, 2.0, 3.0, 4.0]);
        let mut cursor = RecordCursor::new(&mut stream, 16).unwrap();

        cursor.read_f64().unwrap();
        cursor.read_f64().unwrap();

        match cursor.read_f64() {
            Err(WavekitError::RecordOverrun {
                record,
                offset,
                record_length,
                ..
            }) => {
                assert_eq!(record, 0);
                assert_eq!(offset, 16);
                assert_eq!(record_length, 16);
            }
            other => panic!("expected RecordOverrun, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_stream() {
        // 声称 32 字节记录，但流只有 8 字节
        let mut stream = stream_of(&[1.0]);
        let mut cursor = RecordCursor::new(&mut stream, 32).unwrap();

        cursor.read_f64().unwrap();
        assert!(matches!(
            cursor.read_f64(),
            Err(WavekitError::TruncatedStream { record: 0 })
        ));
    }

    #[test]
    fn test_fractional_count_rejected() {
        let mut stream = stream_of(&[2.5]);
        let mut cursor = RecordCursor::new(&mut stream, 24).unwrap();

        assert!(matches!(
            cursor.read_usize("kpoint_count"),
            Err(WavekitError::NonIntegralField {
                field: "kpoint_count",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_count_rejected() {
        let mut stream = stream_of(&[-3.0]);
        let mut cursor = RecordCursor::new(&mut stream, 24).unwrap();

        assert!(matches!(
            cursor.read_usize("band_count"),
            Err(WavekitError::FieldOutOfRange {
                field: "band_count",
                ..
            })
        ));
    }

    #[test]
    fn test_read_complex32() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0.5f32.to_le_bytes());
        bytes.extend_from_slice(&(-0.25f32).to_le_bytes());
        let mut stream = Cursor::new(bytes);
        let mut cursor = RecordCursor::new(&mut stream, 8).unwrap();

        let c = cursor.read_complex32().unwrap();
        assert_eq!(c.re, 0.5);
        assert_eq!(c.im, -0.25);
    }
}
